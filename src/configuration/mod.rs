use crate::cascade::CascadeFaultsConfiguration;
use crate::fault::Fault;
use crate::value::LogicValue;
use crate::{Error, Label};
use alloc::vec::Vec;

/// Static description of a circuit: its primary inputs, its output, every
/// node it declares and how faults cascade between nodes.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CircuitConfiguration<L>
where
    L: Label,
{
    input_labels: Vec<L>,
    output_label: L,
    elements: Vec<L>,
    cascade_faults: CascadeFaultsConfiguration<L>,
}

impl<L> CircuitConfiguration<L>
where
    L: Label,
{
    /// Fails when the cascade faults contain a cyclic master chain.
    pub fn new(
        input_labels: Vec<L>,
        output_label: L,
        elements: Vec<L>,
        cascade_faults: CascadeFaultsConfiguration<L>,
    ) -> Result<Self, Error> {
        cascade_faults.validate()?;
        Ok(CircuitConfiguration {
            input_labels,
            output_label,
            elements,
            cascade_faults,
        })
    }

    pub fn input_labels(&self) -> &[L] {
        &self.input_labels
    }

    pub fn output_label(&self) -> &L {
        &self.output_label
    }

    pub fn elements(&self) -> &[L] {
        &self.elements
    }

    pub fn cascade_faults(&self) -> &CascadeFaultsConfiguration<L> {
        &self.cascade_faults
    }

    /// Every declared element stuck at 0 and at 1, in element order.
    pub fn fault_universe(&self) -> Vec<Fault<L>> {
        self.elements
            .iter()
            .flat_map(|element| {
                LogicValue::ALL
                    .iter()
                    .map(move |value| Fault::new(element.clone(), *value))
            })
            .collect()
    }
}
