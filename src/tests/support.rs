use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::{Algorithm, SolutionRecord, TaggedAlgorithm};
use crate::error::{ExperimentError, Result};
use crate::front;
use crate::problem::Problem;

/// Deterministic pseudo-optimizer for pipeline tests: the produced front
/// depends only on the reseed value, so a pool of any size must reproduce
/// it byte for byte. Can be armed to fail on one specific run.
#[derive(Clone)]
pub struct StubAlgorithm
{
    name: String,
    offset: f64,
    seed: u64,
    fail_on_seed: Option<u64>,
}

impl StubAlgorithm {
    pub fn new(name: impl Into<String>, offset: f64) -> Self
    {
        StubAlgorithm { name: name.into(), offset, seed: 0, fail_on_seed: None }
    }

    pub fn failing_on(mut self, run_id: u64) -> Self
    {
        self.fail_on_seed = Some(run_id);
        self
    }
}

impl Algorithm for StubAlgorithm
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn run(&mut self, problem: &dyn Problem) -> Result<Vec<SolutionRecord>> {
        if self.fail_on_seed == Some(self.seed)
        {
            return Err(ExperimentError::run("injected failure"));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut records = Vec::new();

        for i in 0..4
        {
            let t = i as f64 / 3.0;
            let jitter = rng.gen_range(0.0..0.01);

            let mut objectives = vec![0.0; problem.number_of_objectives()];
            objectives[0] = t + jitter;
            for objective in objectives.iter_mut().skip(1)
            {
                *objective = self.offset + (1.0 - t) + jitter;
            }

            let variables = vec![t; problem.number_of_variables()];

            records.push(SolutionRecord { variables, objectives });
        }

        Ok(records)
    }
}

pub fn stub_tagged(tag: &str, offset: f64, problem: Box<dyn Problem>) -> TaggedAlgorithm
{
    TaggedAlgorithm::with_tag(Box::new(StubAlgorithm::new(tag, offset)), problem, tag)
}

/// Writes a small two-objective reference front usable by every bundled
/// indicator.
pub fn write_reference_front(path: &Path) -> Result<()>
{
    let points: Vec<Vec<f64>> = (0..11)
        .map(|i| {
            let f1 = i as f64 / 10.0;
            vec![f1, 1.0 - f1.sqrt()]
        })
        .collect();

    front::write_vector_file(path, &points)
}
