#![no_std]
extern crate alloc;

use core::fmt::Display;

/// `Error` type is shared by every module of the crate.
pub use error::{Error, ErrorKind};

pub use algorithm::{AlgorithmEntry, CircuitAlgorithm};
pub use cascade::CascadeFaultsConfiguration;
pub use configuration::CircuitConfiguration;
pub use coverage::FaultCoverage;
pub use fault::{Fault, FaultId};
pub use gate::Gate;
pub use runner::{CircuitRunner, InputVector, ResolvedValues};
pub use value::LogicValue;

pub mod algorithm;
pub mod cascade;
pub mod configuration;
pub mod coverage;
#[cfg(feature = "serde")]
pub mod description;
mod error;
pub mod fault;
pub mod gate;
pub mod runner;
pub mod value;

/// `Label` names a node of a circuit: a primary input, an internal signal
/// or the output.
pub trait Label: Ord + Clone + Display {}

impl<T> Label for T where T: Ord + Clone + Display {}
