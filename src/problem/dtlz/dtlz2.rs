use crate::problem::dtlz::{calc_spherical_target, g2};
use crate::problem::Problem;

#[derive(Clone)]
pub struct Dtlz2
{
    name: String,
    n_var: usize,
    n_obj: usize
}

impl Dtlz2 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        Dtlz2 {
            name: format!("DTLZ2_{}_{}", n_var, n_obj),
            n_var,
            n_obj
        }
    }
}

impl Problem for Dtlz2
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

        let g = g2(x_m);

        let mut f = vec![0.0; self.n_obj];

        calc_spherical_target(x, g, &mut f);

        f
    }
}
