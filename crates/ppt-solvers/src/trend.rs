// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Trend Comparator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Table-driven trend comparison.
//!
//! Shared by the periodic packing and molecular bond-angle solvers:
//! one printed row per labeled record plus Pearson correlation and
//! mean absolute error over the whole table. Sequences are equal
//! length and order-preserving; no resampling, no outlier handling.

use ppt_math::stats::{accuracy_percent, mean_absolute_error, pearson};

/// One labeled prediction/observation pair.
#[derive(Debug, Clone)]
pub struct TrendRecord {
    pub label: String,
    pub predicted: f64,
    pub observed: f64,
}

impl TrendRecord {
    pub fn new(label: impl Into<String>, predicted: f64, observed: f64) -> Self {
        TrendRecord {
            label: label.into(),
            predicted,
            observed,
        }
    }

    /// Signed prediction error.
    pub fn diff(&self) -> f64 {
        self.predicted - self.observed
    }

    /// Accuracy of this single row.
    pub fn accuracy_percent(&self) -> f64 {
        accuracy_percent(self.predicted, self.observed)
    }
}

/// Aggregate statistics over a trend table.
#[derive(Debug, Clone, Copy)]
pub struct TrendSummary {
    pub correlation: f64,
    pub mean_abs_error: f64,
}

/// Summarize a full table of records.
pub fn summarize(records: &[TrendRecord]) -> TrendSummary {
    let predicted: Vec<f64> = records.iter().map(|r| r.predicted).collect();
    let observed: Vec<f64> = records.iter().map(|r| r.observed).collect();

    TrendSummary {
        correlation: pearson(&observed, &predicted),
        mean_abs_error: mean_absolute_error(&predicted, &observed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_table_is_perfect() {
        let records = vec![
            TrendRecord::new("A", 1.0, 1.0),
            TrendRecord::new("B", 2.5, 2.5),
            TrendRecord::new("C", -3.0, -3.0),
        ];
        let s = summarize(&records);
        assert!((s.correlation - 1.0).abs() < 1e-12);
        assert!(s.mean_abs_error.abs() < 1e-15);
    }

    #[test]
    fn test_row_diff_and_accuracy() {
        let r = TrendRecord::new("Be", 9.352, 9.323);
        assert!((r.diff() - 0.029).abs() < 1e-9);
        assert!(r.accuracy_percent() > 99.0);
    }

    #[test]
    fn test_anticorrelated_table() {
        let records = vec![
            TrendRecord::new("x", 3.0, 1.0),
            TrendRecord::new("y", 2.0, 2.0),
            TrendRecord::new("z", 1.0, 3.0),
        ];
        let s = summarize(&records);
        assert!((s.correlation + 1.0).abs() < 1e-12);
    }
}
