// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Statistics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validation statistics: predictive accuracy, Pearson correlation,
//! mean absolute error.

/// Predictive accuracy percentage:
/// 100 × (1 − |predicted − reference| / |reference|).
///
/// Contract: `reference` must be nonzero. Every reference constant in
/// the suite is a nonzero literal; a zero reference is a fatal
/// input-contract violation, not a recoverable condition.
pub fn accuracy_percent(predicted: f64, reference: f64) -> f64 {
    (1.0 - (predicted - reference).abs() / reference.abs()) * 100.0
}

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Degenerate input (length < 2 or zero variance) yields NaN, matching
/// the numpy `corrcoef` behavior the Python suite relied on.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Mean absolute error between two equal-length sequences.
pub fn mean_absolute_error(predicted: &[f64], observed: &[f64]) -> f64 {
    debug_assert_eq!(predicted.len(), observed.len());
    let n = predicted.len() as f64;
    predicted
        .iter()
        .zip(observed.iter())
        .map(|(&p, &o)| (p - o).abs())
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_exact_match_is_100() {
        assert!((accuracy_percent(28.3, 28.3) - 100.0).abs() < 1e-12);
        assert!((accuracy_percent(-7.5, -7.5) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_known_offset() {
        // 10% relative error → 90% accuracy
        let acc = accuracy_percent(90.0, 100.0);
        assert!((acc - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mae_identical_is_zero() {
        let x = [5.392, 9.323, 8.298];
        assert!(mean_absolute_error(&x, &x).abs() < 1e-15);
    }

    #[test]
    fn test_mae_constant_offset() {
        let p = [1.0, 2.0, 3.0];
        let o = [1.5, 2.5, 3.5];
        assert!((mean_absolute_error(&p, &o) - 0.5).abs() < 1e-12);
    }
}
