use crate::propagator::Propagator;
use crate::store::Store;

pub trait Constraint {
    /// Checks a complete assignment; false if some variable is still unassigned.
    fn satisfied(&self, store: &Store) -> bool;
    /// this function is run once per search; ids start at index0
    fn create_propagators(&self, index0: usize) -> Vec<Box<dyn Propagator>>;
}
