pub mod dtlz;
pub mod zdt;

use dyn_clone::DynClone;

/// A benchmark problem. Immutable once constructed and shared read-only
/// across concurrently executing runs, hence `Send + Sync`.
pub trait Problem: DynClone + Send + Sync {
    fn name(&self) -> &str;
    fn number_of_variables(&self) -> usize;
    fn number_of_objectives(&self) -> usize;

    /// Inclusive lower/upper bound shared by all decision variables.
    fn variable_bounds(&self) -> (f64, f64);

    /// Maps a decision-variable vector to its objective vector.
    fn evaluate(&self, x: &[f64]) -> Vec<f64>;
}

dyn_clone::clone_trait_object!(Problem);
