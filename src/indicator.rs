use crate::error::{ExperimentError, Result};

/// A scalar quality metric comparing an obtained front to a reference front.
/// Pure and stateless; smaller is conventionally better for every bundled
/// indicator, and the report generators rely on that convention.
pub trait Indicator: Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, front: &[Vec<f64>], reference_front: &[Vec<f64>]) -> Result<f64>;
}

fn check_fronts(name: &str, front: &[Vec<f64>], reference_front: &[Vec<f64>]) -> Result<()>
{
    if front.is_empty()
    {
        return Err(ExperimentError::indicator(format!("{}: obtained front is empty", name)));
    }

    if reference_front.is_empty()
    {
        return Err(ExperimentError::indicator(format!("{}: reference front is empty", name)));
    }

    let dimension = reference_front[0].len();
    if front.iter().chain(reference_front).any(|point| point.len() != dimension)
    {
        return Err(ExperimentError::indicator(format!("{}: objective dimensions differ", name)));
    }

    Ok(())
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64
{
    a.iter().zip(b).map(|(a_i, b_i)| (a_i - b_i).powi(2)).sum::<f64>().sqrt()
}

fn min_distance_to(point: &[f64], front: &[Vec<f64>]) -> f64
{
    front
        .iter()
        .map(|other| euclidean_distance(point, other))
        .fold(f64::INFINITY, f64::min)
}

/// Additive epsilon indicator: the smallest shift that makes the obtained
/// front weakly dominate every reference point.
pub struct Epsilon;

impl Indicator for Epsilon
{
    fn name(&self) -> &str {
        "Epsilon"
    }

    fn evaluate(&self, front: &[Vec<f64>], reference_front: &[Vec<f64>]) -> Result<f64> {
        check_fronts(self.name(), front, reference_front)?;

        let mut epsilon = f64::MIN;

        for reference_point in reference_front
        {
            let mut best_shift = f64::INFINITY;

            for point in front
            {
                let shift = point
                    .iter()
                    .zip(reference_point)
                    .map(|(p_i, r_i)| p_i - r_i)
                    .fold(f64::MIN, f64::max);

                best_shift = best_shift.min(shift);
            }

            epsilon = epsilon.max(best_shift);
        }

        Ok(epsilon)
    }
}

/// Generational distance: quadratic mean closeness of the obtained front to
/// the reference front.
pub struct GenerationalDistance;

impl Indicator for GenerationalDistance
{
    fn name(&self) -> &str {
        "GD"
    }

    fn evaluate(&self, front: &[Vec<f64>], reference_front: &[Vec<f64>]) -> Result<f64> {
        check_fronts(self.name(), front, reference_front)?;

        let sum_sq = front
            .iter()
            .map(|point| min_distance_to(point, reference_front).powi(2))
            .sum::<f64>();

        Ok(sum_sq.sqrt() / front.len() as f64)
    }
}

/// Inverted generational distance: quadratic mean coverage of the reference
/// front by the obtained front.
pub struct InvertedGenerationalDistance;

impl Indicator for InvertedGenerationalDistance
{
    fn name(&self) -> &str {
        "IGD"
    }

    fn evaluate(&self, front: &[Vec<f64>], reference_front: &[Vec<f64>]) -> Result<f64> {
        check_fronts(self.name(), front, reference_front)?;

        let sum_sq = reference_front
            .iter()
            .map(|point| min_distance_to(point, front).powi(2))
            .sum::<f64>();

        Ok(sum_sq.sqrt() / reference_front.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Vec<f64>>
    {
        vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]]
    }

    #[test]
    fn identical_fronts_score_zero()
    {
        let reference = reference();

        assert_eq!(Epsilon.evaluate(&reference, &reference).unwrap(), 0.0);
        assert_eq!(GenerationalDistance.evaluate(&reference, &reference).unwrap(), 0.0);
        assert_eq!(InvertedGenerationalDistance.evaluate(&reference, &reference).unwrap(), 0.0);
    }

    #[test]
    fn epsilon_measures_the_worst_shift()
    {
        let front = vec![vec![0.2, 1.1], vec![0.7, 0.6], vec![1.2, 0.1]];

        let value = Epsilon.evaluate(&front, &reference()).unwrap();
        assert!((value - 0.2).abs() < 1e-9);
    }

    #[test]
    fn gd_averages_distance_to_reference()
    {
        // one point at distance 0.5 from its closest reference point
        let front = vec![vec![0.5, 1.0]];

        let value = GenerationalDistance.evaluate(&front, &reference()).unwrap();
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_front_is_an_indicator_error()
    {
        let result = GenerationalDistance.evaluate(&[], &reference());

        assert!(matches!(result, Err(ExperimentError::IndicatorComputation(_))));
    }
}
