pub mod algorithm;
pub mod error;
pub mod experiment;
pub mod front;
pub mod indicator;
pub mod problem;
pub mod statistics;
#[cfg(test)]
mod tests;

pub use error::{ExperimentError, Result};
