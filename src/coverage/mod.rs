//! Fault coverage bookkeeping for a test campaign.
//!
//! The fault universe is fixed when the coverage is created. Faults are
//! tracked by [`FaultId`] and the covered set only ever grows.

use crate::fault::{Fault, FaultId};
use crate::Label;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::iter;
use log::debug;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct FaultCoverage {
    faults: Vec<FaultId>,
    covered_faults: BTreeSet<FaultId>,
}

impl FaultCoverage {
    pub fn new<L>(faults: &[Fault<L>]) -> Self
    where
        L: Label,
    {
        Self::from_ids(faults.iter().map(Fault::id))
    }

    pub fn from_ids<I>(faults: I) -> Self
    where
        I: IntoIterator<Item = FaultId>,
    {
        FaultCoverage {
            faults: faults.into_iter().collect(),
            covered_faults: BTreeSet::new(),
        }
    }

    /// Marking an id twice, or an id outside the universe, is accepted.
    pub fn mark_as_covered<I>(&mut self, faults: I)
    where
        I: IntoIterator<Item = FaultId>,
    {
        for fault in faults {
            if !self.covered_faults.contains(&fault) {
                debug!("fault {} covered", fault);
                self.covered_faults.insert(fault);
            }
        }
    }

    pub fn mark_fault_as_covered<L>(&mut self, fault: &Fault<L>)
    where
        L: Label,
    {
        self.mark_as_covered(iter::once(fault.id()))
    }

    pub fn is_covered(&self, fault: &FaultId) -> bool {
        self.covered_faults.contains(fault)
    }

    pub fn is_fully_covered(&self) -> bool {
        self.faults.iter().all(|fault| self.is_covered(fault))
    }

    /// Universe faults not covered yet, in universe order.
    pub fn uncovered(&self) -> impl Iterator<Item = &FaultId> {
        self.faults.iter().filter(move |fault| !self.is_covered(fault))
    }

    /// Number of universe entries already covered.
    pub fn covered_count(&self) -> usize {
        self.faults
            .iter()
            .filter(|fault| self.is_covered(fault))
            .count()
    }

    pub fn universe_len(&self) -> usize {
        self.faults.len()
    }
}

#[cfg(test)]
mod unit_tests {
    use crate::coverage::FaultCoverage;
    use crate::fault::{Fault, FaultId};
    use alloc::vec;
    use alloc::vec::Vec;

    fn universe() -> Vec<Fault<&'static str>> {
        vec![
            Fault::stuck_at_0("d"),
            Fault::stuck_at_1("d"),
            Fault::stuck_at_0("z"),
        ]
    }

    #[test]
    fn new() {
        let coverage: FaultCoverage = FaultCoverage::new(&universe());
        assert_eq!(coverage.universe_len(), 3);
        assert_eq!(coverage.covered_count(), 0);
        assert!(!coverage.is_fully_covered());
        assert!(!coverage.is_covered(&FaultId::from("d0")));
    }

    #[test]
    fn mark_as_covered() {
        let mut coverage: FaultCoverage = FaultCoverage::new(&universe());
        coverage.mark_as_covered(vec![FaultId::from("d0"), FaultId::from("z0")]);
        assert!(coverage.is_covered(&FaultId::from("d0")));
        assert!(coverage.is_covered(&FaultId::from("z0")));
        assert!(!coverage.is_covered(&FaultId::from("d1")));

        let uncovered: Vec<&FaultId> = coverage.uncovered().collect();
        assert_eq!(uncovered, vec![&FaultId::from("d1")]);
    }

    #[test]
    fn mark_as_covered_is_idempotent() {
        let mut coverage: FaultCoverage = FaultCoverage::new(&universe());
        coverage.mark_fault_as_covered(&Fault::stuck_at_1("d"));
        coverage.mark_fault_as_covered(&Fault::stuck_at_1("d"));
        assert_eq!(coverage.covered_count(), 1);
    }

    #[test]
    fn is_fully_covered_is_monotonic() {
        let mut coverage: FaultCoverage = FaultCoverage::new(&universe());
        for fault in universe() {
            assert!(!coverage.is_fully_covered());
            coverage.mark_fault_as_covered(&fault);
        }
        assert!(coverage.is_fully_covered());

        coverage.mark_as_covered(vec![FaultId::from("q1"), FaultId::from("d0")]);
        assert!(coverage.is_fully_covered());
        assert!(coverage.is_covered(&FaultId::from("q1")));
        assert_eq!(coverage.covered_count(), 3);
    }

    #[test]
    fn ids_outside_universe() {
        let mut coverage: FaultCoverage = FaultCoverage::new(&universe());
        coverage.mark_as_covered(vec![FaultId::from("x0"), FaultId::from("x1")]);
        assert!(!coverage.is_fully_covered());
        assert_eq!(coverage.covered_count(), 0);
    }

    #[test]
    fn empty_universe() {
        let coverage: FaultCoverage = FaultCoverage::from_ids(Vec::new());
        assert!(coverage.is_fully_covered());
        assert_eq!(coverage, FaultCoverage::default());
    }
}
