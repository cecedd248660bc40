pub mod random_search;

use dyn_clone::DynClone;

use crate::error::Result;
use crate::problem::Problem;

/// One member of an obtained front. Row *i* of the persisted VAR file
/// corresponds to row *i* of the FUN file, so both vectors travel together.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionRecord
{
    pub variables: Vec<f64>,
    pub objectives: Vec<f64>,
}

/// A stochastic multi-objective optimizer. The object is mutable during a
/// run (population, velocities, archives), so a template is never shared
/// between concurrently executing runs: the orchestrator deep-clones it once
/// per run via `DynClone` before scheduling.
pub trait Algorithm: DynClone + Send + Sync {
    fn name(&self) -> &str;

    /// Reseeds the internal random source. Called with the run index at
    /// snapshot time, which makes seeded algorithms deterministic per run.
    fn reseed(&mut self, _seed: u64) {}

    /// Runs to termination and produces an approximation of the Pareto front.
    fn run(&mut self, problem: &dyn Problem) -> Result<Vec<SolutionRecord>>;
}

dyn_clone::clone_trait_object!(Algorithm);

/// Pairs one algorithm instance with the problem it targets and a display
/// tag. The tag is the directory/column key in every output artifact.
/// Cloning a `TaggedAlgorithm` produces the value-isolated snapshot handed
/// to each independent run.
#[derive(Clone)]
pub struct TaggedAlgorithm
{
    algorithm: Box<dyn Algorithm>,
    problem: Box<dyn Problem>,
    tag: String,
}

impl TaggedAlgorithm {
    /// Tags the algorithm with its own declared name.
    pub fn new(algorithm: Box<dyn Algorithm>, problem: Box<dyn Problem>) -> Self
    {
        let tag = algorithm.name().to_string();

        TaggedAlgorithm { algorithm, problem, tag }
    }

    pub fn with_tag(algorithm: Box<dyn Algorithm>, problem: Box<dyn Problem>, tag: impl Into<String>) -> Self
    {
        TaggedAlgorithm { algorithm, problem, tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    pub fn problem_name(&self) -> &str {
        self.problem.name()
    }

    pub fn problem(&self) -> &dyn Problem {
        self.problem.as_ref()
    }

    pub fn reseed(&mut self, seed: u64) {
        self.algorithm.reseed(seed);
    }

    pub fn run(&mut self) -> Result<Vec<SolutionRecord>> {
        self.algorithm.run(self.problem.as_ref())
    }
}

/// True when `a` Pareto-dominates `b` (minimization everywhere).
pub fn dominates(a: &[f64], b: &[f64]) -> bool
{
    let mut strictly_better = false;

    for (a_i, b_i) in a.iter().zip(b)
    {
        if a_i > b_i
        {
            return false;
        }

        if a_i < b_i
        {
            strictly_better = true;
        }
    }

    strictly_better
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::zdt::Zdt1;
    use crate::algorithm::random_search::RandomSearch;

    #[test]
    fn dominance_is_strict()
    {
        assert!(dominates(&[0.0, 1.0], &[0.5, 1.0]));
        assert!(!dominates(&[0.0, 1.0], &[0.0, 1.0]));
        assert!(!dominates(&[0.0, 2.0], &[0.5, 1.0]));
    }

    #[test]
    fn default_tag_is_algorithm_name()
    {
        let tagged = TaggedAlgorithm::new(
            Box::new(RandomSearch::new(10)),
            Box::new(Zdt1::default()),
        );

        assert_eq!(tagged.tag(), "RandomSearch");
        assert_eq!(tagged.problem_name(), "ZDT1");
    }

    #[test]
    fn cloned_snapshot_is_independent()
    {
        let template = TaggedAlgorithm::with_tag(
            Box::new(RandomSearch::new(50)),
            Box::new(Zdt1::default()),
            "RSa",
        );

        let mut snapshot_a = template.clone();
        let mut snapshot_b = template.clone();
        snapshot_a.reseed(1);
        snapshot_b.reseed(2);

        let front_a = snapshot_a.run().unwrap();
        let front_b = snapshot_b.run().unwrap();

        // reseeding one snapshot never leaks into the other
        assert_ne!(front_a, front_b);
        assert_eq!(snapshot_a.run().unwrap(), front_a);
    }
}
