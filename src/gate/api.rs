use crate::value::LogicValue;
use alloc::collections::BTreeMap;

/// `Compute`
pub trait Compute<L> {
    type Error;
    fn compute(&self, resolved: &BTreeMap<L, LogicValue>) -> Result<LogicValue, Self::Error>;
}

/// `Operands`
pub trait Operands<L> {
    fn operands(&self) -> &[L];
}
