use crate::gate::api::Operands;
use crate::gate::Gate;
use crate::{Error, Label};
use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::iter::FromIterator;
use core::slice;

/// How a node obtains its value.
#[derive(PartialEq, PartialOrd, Ord, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlgorithmEntry<L> {
    /// A wire from another node or a primary input.
    Alias(L),
    Gate(Gate<L>),
}

impl<L> AlgorithmEntry<L> {
    /// The labels this entry reads.
    pub fn dependencies(&self) -> &[L] {
        match self {
            AlgorithmEntry::Alias(target) => slice::from_ref(target),
            AlgorithmEntry::Gate(gate) => gate.operands(),
        }
    }
}

/// The evaluation graph of a circuit, in evaluation order.
///
/// The order is trusted: every node an entry reads must be a primary input
/// or a node declared before it. [`CircuitAlgorithm::validate`] checks this
/// without changing anything for a well formed algorithm.
///
/// Deserialized entries go through [`insert`](Self::insert), so a label
/// listed twice keeps its first position and its last entry.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<(L, AlgorithmEntry<L>)>",
        into = "Vec<(L, AlgorithmEntry<L>)>",
        bound(
            serialize = "L: Clone + serde::Serialize",
            deserialize = "L: crate::Label + serde::Deserialize<'de>"
        )
    )
)]
pub struct CircuitAlgorithm<L> {
    entries: Vec<(L, AlgorithmEntry<L>)>,
}

impl<L> CircuitAlgorithm<L>
where
    L: Label,
{
    pub fn new() -> Self {
        CircuitAlgorithm {
            entries: Vec::new(),
        }
    }

    /// Sets the entry of `label`. A label that is already declared keeps its
    /// position and has its entry replaced.
    pub fn insert(&mut self, label: L, entry: AlgorithmEntry<L>) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((label, entry)),
        }
    }

    pub fn alias(mut self, label: L, target: L) -> Self {
        self.insert(label, AlgorithmEntry::Alias(target));
        self
    }

    pub fn gate(mut self, label: L, gate: Gate<L>) -> Self {
        self.insert(label, AlgorithmEntry::Gate(gate));
        self
    }

    pub fn entry(&self, label: &L) -> Option<&AlgorithmEntry<L>> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, entry)| entry)
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.iter().map(|(label, _)| label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &AlgorithmEntry<L>)> {
        self.entries.iter().map(|(label, entry)| (label, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rejects any entry reading a node that is neither one of `inputs` nor
    /// declared earlier in the algorithm.
    pub fn validate(&self, inputs: &[L]) -> Result<(), Error> {
        let mut resolved: BTreeSet<&L> = inputs.iter().collect();
        for (label, entry) in self.entries.iter() {
            for dependency in entry.dependencies() {
                if !resolved.contains(dependency) {
                    return Err(Error::OutOfOrder {
                        node: label.to_string(),
                        dependency: dependency.to_string(),
                    });
                }
            }
            resolved.insert(label);
        }
        Ok(())
    }
}

impl<L> Default for CircuitAlgorithm<L>
where
    L: Label,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> FromIterator<(L, AlgorithmEntry<L>)> for CircuitAlgorithm<L>
where
    L: Label,
{
    fn from_iter<I: IntoIterator<Item = (L, AlgorithmEntry<L>)>>(iter: I) -> Self {
        let mut algorithm: CircuitAlgorithm<L> = CircuitAlgorithm::new();
        for (label, entry) in iter {
            algorithm.insert(label, entry);
        }
        algorithm
    }
}

impl<L> From<Vec<(L, AlgorithmEntry<L>)>> for CircuitAlgorithm<L>
where
    L: Label,
{
    fn from(entries: Vec<(L, AlgorithmEntry<L>)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<L> From<CircuitAlgorithm<L>> for Vec<(L, AlgorithmEntry<L>)> {
    fn from(algorithm: CircuitAlgorithm<L>) -> Self {
        algorithm.entries
    }
}
