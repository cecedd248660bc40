//! Descriptive statistics used by the report generators. Runs recorded as
//! NaN are missing values and must be filtered by the caller before the
//! location/spread functions; `averaged_ranks` places them last instead.

/// Mean of the values, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64
{
    if values.is_empty()
    {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn standard_deviation(values: &[f64]) -> f64
{
    if values.is_empty()
    {
        return 0.0;
    }

    let mean_value = mean(values);

    let sum_sq = values.iter().map(|value| (value - mean_value).powi(2)).sum::<f64>();

    (sum_sq / values.len() as f64).sqrt()
}

/// Median of the values, 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64
{
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    median_of_sorted(&sorted)
}

/// Interquartile range using Tukey's hinges (median of each half, the
/// middle element excluded from both halves for odd lengths).
pub fn interquartile_range(values: &[f64]) -> f64
{
    if values.len() < 2
    {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let half = sorted.len() / 2;
    let lower = &sorted[..half];
    let upper = &sorted[sorted.len() - half..];

    median_of_sorted(upper) - median_of_sorted(lower)
}

/// Ranks values ascending (rank 1 = smallest), averaging tied ranks.
/// NaN values rank behind every finite value.
pub fn averaged_ranks(values: &[f64]) -> Vec<f64>
{
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| rank_key(values[a]).total_cmp(&rank_key(values[b])));

    let mut ranks = vec![0.0; values.len()];

    let mut start = 0;
    while start < order.len()
    {
        let mut end = start;
        while end + 1 < order.len() && rank_key(values[order[end + 1]]) == rank_key(values[order[start]])
        {
            end += 1;
        }

        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end]
        {
            ranks[index] = rank;
        }

        start = end + 1;
    }

    ranks
}

fn rank_key(value: f64) -> f64
{
    if value.is_nan()
    {
        f64::INFINITY
    }
    else
    {
        value
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64
{
    if sorted.is_empty()
    {
        return 0.0;
    }

    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0
    {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
    else
    {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_deviation()
    {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        assert_eq!(mean(&values), 5.0);
        assert_eq!(standard_deviation(&values), 2.0);
    }

    #[test]
    fn median_even_and_odd()
    {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn interquartile_range_of_quartered_sample()
    {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

        assert_eq!(interquartile_range(&values), 4.0);
        assert_eq!(interquartile_range(&[1.0]), 0.0);
    }

    #[test]
    fn ranks_average_ties()
    {
        let ranks = averaged_ranks(&[0.3, 0.1, 0.3, 0.7]);

        assert_eq!(ranks, vec![2.5, 1.0, 2.5, 4.0]);
    }

    #[test]
    fn nan_ranks_last()
    {
        let ranks = averaged_ranks(&[f64::NAN, 0.5, 0.2]);

        assert_eq!(ranks, vec![3.0, 2.0, 1.0]);
    }
}
