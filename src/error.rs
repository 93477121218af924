use alloc::string::String;
use thiserror::Error;

/// The two fatal classes every `Error` belongs to.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
    /// The circuit was assembled wrongly: missing or re-installed algorithm,
    /// cyclic cascade faults.
    Configuration,
    /// A node could not be resolved while running the circuit.
    Evaluation,
}

/// Errors raised while assembling or running a circuit.
///
/// Labels are carried in their displayed form so the error type stays
/// independent of the circuit's label type.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    #[error("algorithm not set on the circuit")]
    AlgorithmNotSet,

    #[error("algorithm already set on the circuit")]
    AlgorithmAlreadySet,

    #[error("cascade faults form a cycle through `{0}`")]
    CascadeCycle(String),

    #[error("invalid circuit value called: `{0}`")]
    UnresolvedReference(String),

    #[error("gate input `{0}` is not resolved")]
    MissingGateInput(String),

    #[error("node `{node}` reads `{dependency}` before it is resolved")]
    OutOfOrder { node: String, dependency: String },

    #[error("output node `{0}` is not produced by the algorithm")]
    MissingOutput(String),

    #[error("invalid logic value: {0}")]
    InvalidLogicValue(u8),

    #[cfg(feature = "serde_json")]
    #[error("invalid circuit description: {0}")]
    Description(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlgorithmNotSet
            | Error::AlgorithmAlreadySet
            | Error::CascadeCycle(_)
            | Error::InvalidLogicValue(_) => ErrorKind::Configuration,
            #[cfg(feature = "serde_json")]
            Error::Description(_) => ErrorKind::Configuration,
            Error::UnresolvedReference(_)
            | Error::MissingGateInput(_)
            | Error::OutOfOrder { .. }
            | Error::MissingOutput(_) => ErrorKind::Evaluation,
        }
    }
}
