//! Serialized circuit descriptions.
//!
//! A [`CircuitDescription`] carries everything needed to assemble a
//! [`CircuitRunner`]: the configuration and the algorithm. Logic values are
//! written as `0` and `1`, gates as `{"nand": ["a", "b"]}` and aliases as
//! `{"alias": "d"}`.

use crate::algorithm::CircuitAlgorithm;
use crate::cascade::CascadeFaultsConfiguration;
use crate::configuration::CircuitConfiguration;
use crate::runner::api::SetAlgorithm;
use crate::runner::CircuitRunner;
use crate::{Error, Label};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "L: Clone + Serialize",
    deserialize = "L: Label + Deserialize<'de>"
))]
pub struct CircuitDescription<L> {
    pub inputs: Vec<L>,
    pub output: L,
    pub elements: Vec<L>,
    #[serde(default)]
    pub cascade_faults: CascadeFaultsConfiguration<L>,
    pub algorithm: CircuitAlgorithm<L>,
}

impl<L> CircuitDescription<L>
where
    L: Label,
{
    /// Builds a runner with the algorithm installed, rejecting cyclic
    /// cascade faults and out of order algorithm entries.
    pub fn into_runner(self) -> Result<CircuitRunner<L>, Error> {
        self.algorithm.validate(&self.inputs)?;
        let configuration: CircuitConfiguration<L> = CircuitConfiguration::new(
            self.inputs,
            self.output,
            self.elements,
            self.cascade_faults,
        )?;
        let mut runner: CircuitRunner<L> = CircuitRunner::new(configuration);
        runner.set_algorithm(self.algorithm)?;
        Ok(runner)
    }
}

#[cfg(feature = "serde_json")]
impl<L> CircuitDescription<L>
where
    L: Label + serde::de::DeserializeOwned,
{
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        use alloc::string::ToString;
        serde_json::from_str(s).map_err(|e| Error::Description(e.to_string()))
    }
}
