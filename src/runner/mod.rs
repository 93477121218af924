pub mod api;

use crate::algorithm::{AlgorithmEntry, CircuitAlgorithm};
use crate::configuration::CircuitConfiguration;
use crate::coverage::FaultCoverage;
use crate::fault::Fault;
use crate::gate::api::Compute;
use crate::value::LogicValue;
use crate::{Error, Label};
use alloc::collections::BTreeMap;
use alloc::string::ToString;
use api::{Detect, RunCircuit, SetAlgorithm};
use core::iter;
use log::{debug, trace};

/// Primary input values of one test vector.
pub type InputVector<L> = BTreeMap<L, LogicValue>;

/// Every node of an algorithm with its resolved value.
pub type ResolvedValues<L> = BTreeMap<L, LogicValue>;

/// Evaluates a circuit algorithm, optionally under a single stuck-at fault.
///
/// The algorithm is installed once with [`SetAlgorithm::set_algorithm`];
/// afterwards the runner only reads it, so every run is a pure function of
/// the input vector and the fault.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CircuitRunner<L>
where
    L: Label,
{
    configuration: CircuitConfiguration<L>,
    algorithm: Option<CircuitAlgorithm<L>>,
}

impl<L> CircuitRunner<L>
where
    L: Label,
{
    pub fn new(configuration: CircuitConfiguration<L>) -> Self {
        CircuitRunner {
            configuration,
            algorithm: None,
        }
    }

    pub fn configuration(&self) -> &CircuitConfiguration<L> {
        &self.configuration
    }

    pub fn algorithm(&self) -> Option<&CircuitAlgorithm<L>> {
        self.algorithm.as_ref()
    }

    /// Value of the configured output node.
    pub fn output(
        &self,
        input: &InputVector<L>,
        fault: Option<&Fault<L>>,
    ) -> Result<LogicValue, Error> {
        let output_label: &L = self.configuration.output_label();
        self.run_circuit(input, fault)?
            .get(output_label)
            .copied()
            .ok_or_else(|| Error::MissingOutput(output_label.to_string()))
    }

    /// Applies `input` to every fault of `faults` not yet covered and marks
    /// the ones it detects. Returns how many faults were newly covered.
    pub fn cover(
        &self,
        input: &InputVector<L>,
        faults: &[Fault<L>],
        coverage: &mut FaultCoverage,
    ) -> Result<usize, Error> {
        let expected: LogicValue = self.output(input, None)?;
        let mut covered: usize = 0;
        for fault in faults {
            let id = fault.id();
            if coverage.is_covered(&id) {
                continue;
            }
            if self.output(input, Some(fault))? != expected {
                coverage.mark_as_covered(iter::once(id));
                covered += 1;
            }
        }
        Ok(covered)
    }

    fn get_or_override<G>(
        &self,
        label: &L,
        fault: Option<&Fault<L>>,
        generator: G,
    ) -> Result<LogicValue, Error>
    where
        G: FnOnce() -> Result<LogicValue, Error>,
    {
        if let Some(fault) = fault {
            if fault.node == *label {
                trace!("`{}` forced to {}", label, fault.value);
                return Ok(fault.value);
            }
        }
        // A slave takes the fault of its root master; otherwise it keeps
        // computing its own entry.
        match self.configuration.cascade_faults().master_element(label)? {
            Some(master) => {
                trace!("`{}` follows cascade master `{}`", label, master);
                self.get_or_override(&master, fault, generator)
            }
            None => generator(),
        }
    }

    fn resolve(
        entry: &AlgorithmEntry<L>,
        input: &InputVector<L>,
        resolved: &ResolvedValues<L>,
    ) -> Result<LogicValue, Error> {
        match entry {
            AlgorithmEntry::Alias(target) => resolved
                .get(target)
                .or_else(|| input.get(target))
                .copied()
                .ok_or_else(|| Error::UnresolvedReference(target.to_string())),
            AlgorithmEntry::Gate(gate) => gate.compute(resolved),
        }
    }
}

impl<L> SetAlgorithm<CircuitAlgorithm<L>> for CircuitRunner<L>
where
    L: Label,
{
    type Error = Error;
    fn set_algorithm(&mut self, a: CircuitAlgorithm<L>) -> Result<(), Self::Error> {
        if self.algorithm.is_some() {
            return Err(Error::AlgorithmAlreadySet);
        }
        debug!("algorithm set with {} nodes", a.len());
        self.algorithm = Some(a);
        Ok(())
    }
}

impl<L> RunCircuit<InputVector<L>, Fault<L>> for CircuitRunner<L>
where
    L: Label,
{
    type Output = ResolvedValues<L>;
    type Error = Error;
    fn run_circuit(
        &self,
        i: &InputVector<L>,
        f: Option<&Fault<L>>,
    ) -> Result<Self::Output, Self::Error> {
        let algorithm: &CircuitAlgorithm<L> =
            self.algorithm.as_ref().ok_or(Error::AlgorithmNotSet)?;
        match f {
            Some(fault) => debug!("running {} nodes under {}", algorithm.len(), fault),
            None => debug!("running {} nodes fault free", algorithm.len()),
        }
        let mut resolved: ResolvedValues<L> = BTreeMap::new();
        for (label, entry) in algorithm.iter() {
            let value: LogicValue =
                self.get_or_override(label, f, || Self::resolve(entry, i, &resolved))?;
            resolved.insert(label.clone(), value);
        }
        Ok(resolved)
    }
}

impl<L> Detect<InputVector<L>, Fault<L>> for CircuitRunner<L>
where
    L: Label,
{
    type Error = Error;
    fn detects(&self, i: &InputVector<L>, f: &Fault<L>) -> Result<bool, Self::Error> {
        Ok(self.output(i, None)? != self.output(i, Some(f))?)
    }
}
