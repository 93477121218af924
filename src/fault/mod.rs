use crate::value::LogicValue;
use crate::Label;
use alloc::format;
use alloc::string::String;
use core::fmt;

/// A single stuck-at fault: `node` is forced to `value` whatever its own
/// logic computes.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault<L> {
    pub node: L,
    pub value: LogicValue,
}

impl<L> Fault<L>
where
    L: Label,
{
    pub fn new(node: L, value: LogicValue) -> Self {
        Fault { node, value }
    }

    pub fn stuck_at_0(node: L) -> Self {
        Fault::new(node, LogicValue::Zero)
    }

    pub fn stuck_at_1(node: L) -> Self {
        Fault::new(node, LogicValue::One)
    }

    pub fn id(&self) -> FaultId {
        FaultId::from(self)
    }
}

impl<L> fmt::Display for Fault<L>
where
    L: Label,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stuck-at-{}", self.node, self.value)
    }
}

/// The key a fault is tracked under by [`FaultCoverage`](crate::FaultCoverage):
/// the node label followed by the forced value, e.g. `d1`.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FaultId(String);

impl FaultId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<L> From<&Fault<L>> for FaultId
where
    L: Label,
{
    fn from(fault: &Fault<L>) -> Self {
        FaultId(format!("{}{}", fault.node, fault.value))
    }
}

impl From<String> for FaultId {
    fn from(s: String) -> Self {
        FaultId(s)
    }
}

impl From<&str> for FaultId {
    fn from(s: &str) -> Self {
        FaultId(String::from(s))
    }
}

impl fmt::Display for FaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
