pub mod api;
use crate::value::LogicValue;
use crate::{Error, Label};
use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use api::{Compute, Operands};
use core::slice;

/// A logic unit computing one node from already resolved nodes.
///
/// Every variant holds only the labels it reads. `Nand` is evaluated as the
/// negation of the `And` over the same operands.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gate<L> {
    And(Vec<L>),
    Not(L),
    Identity(L),
    Nand(Vec<L>),
}

impl<L> Gate<L>
where
    L: Label,
{
    pub fn and<I: IntoIterator<Item = L>>(operands: I) -> Self {
        Gate::And(operands.into_iter().collect())
    }

    pub fn nand<I: IntoIterator<Item = L>>(operands: I) -> Self {
        Gate::Nand(operands.into_iter().collect())
    }

    pub fn not(operand: L) -> Self {
        Gate::Not(operand)
    }

    pub fn identity(operand: L) -> Self {
        Gate::Identity(operand)
    }

    fn read(resolved: &BTreeMap<L, LogicValue>, label: &L) -> Result<LogicValue, Error> {
        resolved
            .get(label)
            .copied()
            .ok_or_else(|| Error::MissingGateInput(label.to_string()))
    }

    fn conjunction(resolved: &BTreeMap<L, LogicValue>, labels: &[L]) -> Result<LogicValue, Error> {
        // Every operand is read, even after a zero, so a missing input is
        // always reported.
        let mut accumulator: LogicValue = LogicValue::One;
        for label in labels {
            if Self::read(resolved, label)? == LogicValue::Zero {
                accumulator = LogicValue::Zero;
            }
        }
        Ok(accumulator)
    }
}

impl<L> Compute<L> for Gate<L>
where
    L: Label,
{
    type Error = Error;
    fn compute(&self, resolved: &BTreeMap<L, LogicValue>) -> Result<LogicValue, Self::Error> {
        match self {
            Gate::And(labels) => Self::conjunction(resolved, labels),
            Gate::Not(label) => Ok(!Self::read(resolved, label)?),
            Gate::Identity(label) => Self::read(resolved, label),
            Gate::Nand(labels) => Ok(!Self::conjunction(resolved, labels)?),
        }
    }
}

impl<L> Operands<L> for Gate<L> {
    fn operands(&self) -> &[L] {
        match self {
            Gate::And(labels) | Gate::Nand(labels) => labels,
            Gate::Not(label) | Gate::Identity(label) => slice::from_ref(label),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use crate::gate::api::{Compute, Operands};
    use crate::gate::Gate;
    use crate::value::LogicValue::{One, Zero};
    use crate::{Error, LogicValue};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn resolved(values: &[(&'static str, LogicValue)]) -> BTreeMap<&'static str, LogicValue> {
        values.iter().copied().collect()
    }

    #[test]
    fn and() -> Result<(), Error> {
        let gate: Gate<&str> = Gate::and(["a", "b", "c"]);
        assert_eq!(gate.compute(&resolved(&[("a", One), ("b", One), ("c", One)]))?, One);
        assert_eq!(gate.compute(&resolved(&[("a", One), ("b", Zero), ("c", One)]))?, Zero);
        assert_eq!(gate.compute(&resolved(&[("a", Zero), ("b", Zero), ("c", Zero)]))?, Zero);
        Ok(())
    }

    #[test]
    fn and_without_operands() -> Result<(), Error> {
        let gate: Gate<&str> = Gate::And(Vec::new());
        assert_eq!(gate.compute(&BTreeMap::new())?, One);
        let gate: Gate<&str> = Gate::Nand(Vec::new());
        assert_eq!(gate.compute(&BTreeMap::new())?, Zero);
        Ok(())
    }

    #[test]
    fn not() -> Result<(), Error> {
        let gate: Gate<&str> = Gate::not("m");
        assert_eq!(gate.compute(&resolved(&[("m", Zero)]))?, One);
        assert_eq!(gate.compute(&resolved(&[("m", One)]))?, Zero);
        Ok(())
    }

    #[test]
    fn identity() -> Result<(), Error> {
        let gate: Gate<&str> = Gate::identity("m");
        assert_eq!(gate.compute(&resolved(&[("m", Zero)]))?, Zero);
        assert_eq!(gate.compute(&resolved(&[("m", One)]))?, One);
        Ok(())
    }

    #[test]
    fn nand() -> Result<(), Error> {
        let gate: Gate<&str> = Gate::nand(["a", "b"]);
        let and: Gate<&str> = Gate::and(["a", "b"]);
        for a in LogicValue::ALL.iter().copied() {
            for b in LogicValue::ALL.iter().copied() {
                let values = resolved(&[("a", a), ("b", b)]);
                assert_eq!(gate.compute(&values)?, !and.compute(&values)?);
            }
        }
        Ok(())
    }

    #[test]
    fn missing_input() {
        let gate: Gate<&str> = Gate::nand(["a", "q"]);
        assert_eq!(
            gate.compute(&resolved(&[("a", Zero)])),
            Err(Error::MissingGateInput(String::from("q")))
        );
        let gate: Gate<&str> = Gate::identity("q");
        assert!(gate.compute(&BTreeMap::new()).is_err());
    }

    #[test]
    fn operands() {
        let gate: Gate<&str> = Gate::nand(["e", "f", "p"]);
        assert_eq!(gate.operands(), &["e", "f", "p"]);
        let gate: Gate<&str> = Gate::not("m");
        assert_eq!(gate.operands(), &["m"]);
    }
}
