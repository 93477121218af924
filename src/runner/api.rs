/// `SetAlgorithm`
pub trait SetAlgorithm<A> {
    type Error;
    fn set_algorithm(&mut self, a: A) -> Result<(), Self::Error>;
}

/// `RunCircuit`
pub trait RunCircuit<I, F> {
    type Output;
    type Error;
    fn run_circuit(&self, i: &I, f: Option<&F>) -> Result<Self::Output, Self::Error>;
}

/// `Detect`
pub trait Detect<I, F> {
    type Error;
    fn detects(&self, i: &I, f: &F) -> Result<bool, Self::Error>;
}
