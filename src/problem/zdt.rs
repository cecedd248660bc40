use crate::problem::Problem;

/// Classic two-objective ZDT1 benchmark with a convex Pareto front.
#[derive(Clone)]
pub struct Zdt1
{
    n_var: usize
}

impl Zdt1 {
    pub fn new(n_var: usize) -> Self
    {
        Zdt1 { n_var }
    }
}

impl Default for Zdt1 {
    fn default() -> Self {
        Zdt1::new(30)
    }
}

impl Problem for Zdt1
{
    fn name(&self) -> &str {
        "ZDT1"
    }

    fn number_of_variables(&self) -> usize {
        self.n_var
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn variable_bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let f1 = x[0];

        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (self.n_var as f64 - 1.0);
        let f2 = g * (1.0 - (f1 / g).sqrt());

        vec![f1, f2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_front_matches_closed_form()
    {
        let problem = Zdt1::default();

        // tail variables at zero put the solution on the true front
        let mut x = vec![0.0; 30];
        x[0] = 0.25;

        let f = problem.evaluate(&x);

        assert_eq!(f[0], 0.25);
        assert!((f[1] - 0.5).abs() < 1e-9);
    }
}
