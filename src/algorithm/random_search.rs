use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::{dominates, Algorithm, SolutionRecord};
use crate::error::Result;
use crate::problem::Problem;

/// Baseline algorithm: samples the decision space uniformly and keeps the
/// non-dominated subset. Useful as a sanity floor for real optimizers and as
/// a fully seedable reference for determinism checks.
#[derive(Clone)]
pub struct RandomSearch
{
    max_evaluations: usize,
    seed: u64,
}

impl RandomSearch {
    pub fn new(max_evaluations: usize) -> Self
    {
        RandomSearch { max_evaluations, seed: 0 }
    }
}

impl Algorithm for RandomSearch
{
    fn name(&self) -> &str {
        "RandomSearch"
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn run(&mut self, problem: &dyn Problem) -> Result<Vec<SolutionRecord>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (min_x, max_x) = problem.variable_bounds();

        let mut archive: Vec<SolutionRecord> = Vec::new();

        for _ in 0..self.max_evaluations
        {
            let x: Vec<f64> = (0..problem.number_of_variables())
                .map(|_| rng.gen_range(min_x..=max_x))
                .collect();

            let f = problem.evaluate(&x);

            if archive.iter().any(|member| dominates(&member.objectives, &f))
            {
                continue;
            }

            archive.retain(|member| !dominates(&f, &member.objectives));
            archive.push(SolutionRecord { variables: x, objectives: f });
        }

        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::zdt::Zdt1;

    #[test]
    fn same_seed_reproduces_the_front()
    {
        let problem = Zdt1::default();

        let mut first = RandomSearch::new(200);
        let mut second = RandomSearch::new(200);
        first.reseed(7);
        second.reseed(7);

        assert_eq!(first.run(&problem).unwrap(), second.run(&problem).unwrap());
    }

    #[test]
    fn archive_is_mutually_non_dominated()
    {
        let problem = Zdt1::default();

        let mut algorithm = RandomSearch::new(500);
        algorithm.reseed(3);

        let front = algorithm.run(&problem).unwrap();
        assert!(!front.is_empty());

        for a in &front
        {
            assert_eq!(a.variables.len(), 30);
            assert_eq!(a.objectives.len(), 2);

            for b in &front
            {
                assert!(!dominates(&a.objectives, &b.objectives));
            }
        }
    }
}
