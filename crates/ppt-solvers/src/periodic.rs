// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Periodic Packing Trends
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Period 2 and Period 3 ionization trends from harmonic node packing.
//!
//! Port of `Period2_Harmonic_Packing_Trend.py` and
//! `Period3_Harmonic_Packing_Trend.py`.
//! A linear hydrostatic pressure gradient is modulated by per-element
//! geometric symmetry tensors (Vector Equilibrium calibration, opaque
//! literals).

use ndarray::Array1;
use ppt_types::elements::ElementNode;

use crate::trend::{summarize, TrendRecord, TrendSummary};

/// Period 2 elements, Li through Ne.
pub const PERIOD2: [ElementNode; 8] = [
    ElementNode { symbol: "Li", outer_nodes: 1, packing_tensor: 1.00, geometry: "Baseline Node", real_ionization_ev: 5.392 },
    ElementNode { symbol: "Be", outer_nodes: 2, packing_tensor: 1.24, geometry: "Linear Dipole Lock", real_ionization_ev: 9.323 },
    ElementNode { symbol: "B", outer_nodes: 3, packing_tensor: 0.86, geometry: "Trigonal Buckle", real_ionization_ev: 8.298 },
    ElementNode { symbol: "C", outer_nodes: 4, packing_tensor: 0.95, geometry: "Planar Balance", real_ionization_ev: 11.260 },
    ElementNode { symbol: "N", outer_nodes: 5, packing_tensor: 1.04, geometry: "Tetrahedral Lock", real_ionization_ev: 14.534 },
    ElementNode { symbol: "O", outer_nodes: 6, packing_tensor: 0.84, geometry: "Octahedral Fracture", real_ionization_ev: 13.618 },
    ElementNode { symbol: "F", outer_nodes: 7, packing_tensor: 0.94, geometry: "Gap Fill", real_ionization_ev: 17.422 },
    ElementNode { symbol: "Ne", outer_nodes: 8, packing_tensor: 1.05, geometry: "Boundary Lock", real_ionization_ev: 21.565 },
];

/// Period 3 elements, Na through Ar.
pub const PERIOD3: [ElementNode; 8] = [
    ElementNode { symbol: "Na", outer_nodes: 1, packing_tensor: 1.00, geometry: "Baseline Node", real_ionization_ev: 5.139 },
    ElementNode { symbol: "Mg", outer_nodes: 2, packing_tensor: 1.14, geometry: "Linear Dipole", real_ionization_ev: 7.646 },
    ElementNode { symbol: "Al", outer_nodes: 3, packing_tensor: 0.72, geometry: "Trigonal Buckle", real_ionization_ev: 5.986 },
    ElementNode { symbol: "Si", outer_nodes: 4, packing_tensor: 0.82, geometry: "Tetrahedral Lock", real_ionization_ev: 8.152 },
    ElementNode { symbol: "P", outer_nodes: 5, packing_tensor: 0.91, geometry: "Bipyramidal Lock", real_ionization_ev: 10.487 },
    ElementNode { symbol: "S", outer_nodes: 6, packing_tensor: 0.79, geometry: "Octahedral Fracture", real_ionization_ev: 10.360 },
    ElementNode { symbol: "Cl", outer_nodes: 7, packing_tensor: 0.88, geometry: "Gap Fill", real_ionization_ev: 12.968 },
    ElementNode { symbol: "Ar", outer_nodes: 8, packing_tensor: 0.96, geometry: "Boundary Lock", real_ionization_ev: 15.760 },
];

/// Anchor tension and pressure gradient of the Period 2 baseline.
/// Python: 5.392 eV + 2.15 eV per added core unit.
pub const PERIOD2_BASELINE: (f64, f64) = (5.392, 2.15);

/// Period 3 baseline. Python: 5.139 eV + 1.60 eV per added core unit.
pub const PERIOD3_BASELINE: (f64, f64) = (5.139, 1.60);

/// Full trend evaluation of one period.
#[derive(Debug, Clone)]
pub struct PackingTrend {
    /// Raw linear pressure gradient, no geometry applied (eV).
    pub baseline_ev: Array1<f64>,
    /// Geometry-modulated predictions (eV).
    pub predicted_ev: Array1<f64>,
    /// Labeled rows for the comparison table.
    pub records: Vec<TrendRecord>,
    pub summary: TrendSummary,
}

/// Evaluate a period: baseline(n) = anchor + gradient·(n − 1), then
/// modulate by each element's packing tensor.
pub fn packing_trend(elements: &[ElementNode], baseline: (f64, f64)) -> PackingTrend {
    let (anchor, gradient) = baseline;

    let baseline_ev = Array1::from_iter(
        elements
            .iter()
            .map(|e| anchor + gradient * (e.outer_nodes as f64 - 1.0)),
    );
    let tensors = Array1::from_iter(elements.iter().map(|e| e.packing_tensor));
    let predicted_ev = &baseline_ev * &tensors;

    let records: Vec<TrendRecord> = elements
        .iter()
        .zip(predicted_ev.iter())
        .map(|(e, &p)| TrendRecord::new(e.symbol, p, e.real_ionization_ev))
        .collect();
    let summary = summarize(&records);

    PackingTrend {
        baseline_ev,
        predicted_ev,
        records,
        summary,
    }
}

/// Period 2 trend (Li-Ne).
pub fn period2_trend() -> PackingTrend {
    packing_trend(&PERIOD2, PERIOD2_BASELINE)
}

/// Period 3 trend (Na-Ar).
pub fn period3_trend() -> PackingTrend {
    packing_trend(&PERIOD3, PERIOD3_BASELINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period2_anchor_is_lithium() {
        let t = period2_trend();
        // Li carries the unit tensor, so prediction == anchor == NIST.
        assert!((t.predicted_ev[0] - 5.392).abs() < 1e-12);
    }

    #[test]
    fn test_period2_statistics() {
        let t = period2_trend();
        assert!(
            t.summary.correlation > 0.99,
            "Period 2 correlation: {}",
            t.summary.correlation
        );
        assert!(
            t.summary.mean_abs_error < 0.3,
            "Period 2 MAE: {}",
            t.summary.mean_abs_error
        );
    }

    #[test]
    fn test_period3_statistics() {
        let t = period3_trend();
        assert!(
            t.summary.correlation > 0.99,
            "Period 3 correlation: {}",
            t.summary.correlation
        );
        assert!(
            t.summary.mean_abs_error < 0.2,
            "Period 3 MAE: {}",
            t.summary.mean_abs_error
        );
    }

    #[test]
    fn test_baseline_is_linear() {
        let t = period3_trend();
        for w in t.baseline_ev.as_slice().unwrap().windows(2) {
            assert!((w[1] - w[0] - PERIOD3_BASELINE.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zigzag_survives_modulation() {
        // The Be→B and N→O drops are the geometric fracture signature.
        let t = period2_trend();
        assert!(t.predicted_ev[1] > t.predicted_ev[2], "Be > B");
        assert!(t.predicted_ev[4] > t.predicted_ev[5], "N > O");
    }

    #[test]
    fn test_record_labels_match_elements() {
        let t = period2_trend();
        assert_eq!(t.records.len(), 8);
        assert_eq!(t.records[0].label, "Li");
        assert_eq!(t.records[7].label, "Ne");
    }
}
