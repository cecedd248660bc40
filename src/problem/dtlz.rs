pub mod dtlz1;
pub mod dtlz2;

fn g1(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2) - (20.0 * std::f64::consts::PI * (x_m_i - 0.5)).cos();
    }

    100.0 * (x_m.len() as f64 + sum)
}

fn g2(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2);
    }

    sum
}

fn calc_spherical_target(x: &[f64], g: f64, f: &mut [f64])
{
    for i in 0..f.len()
    {
        let mut f_val = 1.0 + g;

        for x_i in &x[..x.len() - i]
        {
            f_val *= (x_i * std::f64::consts::PI / 2.0).cos();
        }

        if i > 0
        {
            f_val *= (x[x.len() - i] * std::f64::consts::PI / 2.0).sin();
        }

        f[i] = f_val;
    }
}
