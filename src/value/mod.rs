use crate::Error;
use core::convert::TryFrom;
use core::fmt;
use core::ops::Not;

/// A resolved binary value of a circuit node.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub enum LogicValue {
    Zero,
    One,
}

impl LogicValue {
    /// Both values, in ascending order.
    pub const ALL: [LogicValue; 2] = [LogicValue::Zero, LogicValue::One];
}

impl Default for LogicValue {
    fn default() -> Self {
        LogicValue::Zero
    }
}

impl From<bool> for LogicValue {
    fn from(b: bool) -> Self {
        if b {
            LogicValue::One
        } else {
            LogicValue::Zero
        }
    }
}

impl From<LogicValue> for bool {
    fn from(v: LogicValue) -> Self {
        match v {
            LogicValue::Zero => false,
            LogicValue::One => true,
        }
    }
}

impl From<LogicValue> for u8 {
    fn from(v: LogicValue) -> Self {
        match v {
            LogicValue::Zero => 0,
            LogicValue::One => 1,
        }
    }
}

impl TryFrom<u8> for LogicValue {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(LogicValue::Zero),
            1 => Ok(LogicValue::One),
            _ => Err(Error::InvalidLogicValue(n)),
        }
    }
}

impl Not for LogicValue {
    type Output = LogicValue;
    fn not(self) -> Self::Output {
        match self {
            LogicValue::Zero => LogicValue::One,
            LogicValue::One => LogicValue::Zero,
        }
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
