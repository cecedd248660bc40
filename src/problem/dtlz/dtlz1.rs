use crate::problem::dtlz::g1;
use crate::problem::Problem;

#[derive(Clone)]
pub struct Dtlz1
{
    name: String,
    n_var: usize,
    n_obj: usize
}

impl Dtlz1 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        Dtlz1 {
            name: format!("DTLZ1_{}_{}", n_var, n_obj),
            n_var,
            n_obj
        }
    }
}

impl Problem for Dtlz1
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn number_of_variables(&self) -> usize {
        self.n_var
    }

    fn number_of_objectives(&self) -> usize {
        self.n_obj
    }

    fn variable_bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn evaluate(&self, in_x: &[f64]) -> Vec<f64> {
        let x = &in_x[..self.n_obj - 1];
        let x_m = &in_x[self.n_obj - 1..];

        let g = g1(x_m);

        let mut f = vec![0.0; self.n_obj];

        for i in 0..self.n_obj
        {
            let mut f_val = 0.5 * (1.0 + g);

            for x_i in &x[..x.len() - i]
            {
                f_val *= x_i;
            }

            if i > 0
            {
                f_val *= 1.0 - x[x.len() - i];
            }

            f[i] = f_val;
        }

        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_solutions_sum_to_half()
    {
        let problem = Dtlz1::new(7, 3);

        // x_m = 0.5 zeroes the g term, so the front satisfies sum(f) = 0.5
        let f = problem.evaluate(&[0.3, 0.8, 0.5, 0.5, 0.5, 0.5, 0.5]);

        assert_eq!(f.len(), 3);
        assert!((f.iter().sum::<f64>() - 0.5).abs() < 1e-9);
    }
}
