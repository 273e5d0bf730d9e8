//! Descriptive-statistics math shared by the calculators.
//!
//! Sample estimators throughout: variance with one delta degree of
//! freedom, linear-interpolation percentiles, adjusted Fisher-Pearson
//! skewness, and bias-corrected excess kurtosis.

/// Arithmetic mean. Caller guarantees a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentile with linear interpolation over an ascending-sorted slice.
/// `q` is in [0, 1]; caller guarantees a non-empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if lo + 1 >= n {
        sorted[n - 1]
    } else {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    }
}

/// Sample variance (ddof = 1); undefined below two observations.
pub fn sample_variance(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / (n - 1) as f64)
}

fn central_moment(values: &[f64], mean: f64, order: i32) -> f64 {
    values.iter().map(|v| (v - mean).powi(order)).sum::<f64>() / values.len() as f64
}

/// Adjusted Fisher-Pearson skewness: `g1 * sqrt(n(n-1)) / (n-2)`.
/// Undefined below three observations or for zero variance.
pub fn skewness(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let m2 = central_moment(values, mean, 2);
    if m2 == 0.0 {
        return None;
    }
    let g1 = central_moment(values, mean, 3) / m2.powf(1.5);
    let nf = n as f64;
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Bias-corrected excess kurtosis. Undefined below four observations or
/// for zero variance.
pub fn kurtosis(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let m2 = central_moment(values, mean, 2);
    if m2 == 0.0 {
        return None;
    }
    let g2 = central_moment(values, mean, 4) / (m2 * m2) - 3.0;
    let nf = n as f64;
    Some(((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)))
}

/// Ranks with ties averaged (1-based), the transform behind Spearman.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Average of positions i..=j, 1-based
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

/// Pearson correlation coefficient; NaN when either side has zero
/// variance or fewer than two observations.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_a = mean(&a[..n]);
    let mean_b = mean(&b[..n]);
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentiles_interpolate_linearly() {
        let xs = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert!(close(percentile(&xs, 0.25), 2.0));
        assert!(close(percentile(&xs, 0.5), 3.0));
        assert!(close(percentile(&xs, 0.75), 4.0));
        assert!(close(percentile(&xs, 0.0), 1.0));
        assert!(close(percentile(&xs, 1.0), 100.0));

        let pair = [10.0, 20.0];
        assert!(close(percentile(&pair, 0.5), 15.0));
        assert!(close(percentile(&[7.0], 0.75), 7.0));
    }

    #[test]
    fn variance_needs_two_observations() {
        assert_eq!(sample_variance(&[5.0], 5.0), None);
        let xs = [1.0, 2.0, 3.0];
        assert!(close(sample_variance(&xs, 2.0).unwrap(), 1.0));
    }

    #[test]
    fn skewness_is_bias_adjusted() {
        // g1 = 88920 / 1522^1.5, adjusted by sqrt(5*4)/3
        let xs = [1.0, 2.0, 3.0, 4.0, 100.0];
        let m = mean(&xs);
        assert!((skewness(&xs, m).unwrap() - 2.2323959).abs() < 1e-6);
        assert_eq!(skewness(&[1.0, 2.0], 1.5), None);
        assert_eq!(skewness(&[3.0, 3.0, 3.0], 3.0), None);
    }

    #[test]
    fn kurtosis_is_bias_corrected() {
        // g2 = 7520966.8 / 1522^2 - 3, bias-corrected for n = 5
        let xs = [1.0, 2.0, 3.0, 4.0, 100.0];
        let m = mean(&xs);
        assert!((kurtosis(&xs, m).unwrap() - 4.9868660).abs() < 1e-6);
        assert_eq!(kurtosis(&[1.0, 2.0, 3.0], 2.0), None);
    }

    #[test]
    fn ranks_average_ties() {
        let xs = [10.0, 20.0, 20.0, 30.0];
        assert_eq!(average_ranks(&xs), vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn pearson_on_monotonic_data() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        assert!(close(pearson(&a, &b), 1.0));
        let c = [4.0, 3.0, 2.0, 1.0];
        assert!(close(pearson(&a, &c), -1.0));
        assert!(pearson(&a, &[1.0, 1.0, 1.0, 1.0]).is_nan());
    }
}
