// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Bond Angles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Molecular bond angles from hydrostatic node compression.
//!
//! Port of `Water_Bond_Angle_Hydrostatic_Solver.py` and
//! `Molecular_Bond_Angle_Trend_Solver.py`.
//! The ideal tetrahedral angle is crushed in proportion to the
//! displacement asymmetry of the central core.

use ppt_math::stats::accuracy_percent;
use ppt_types::elements::MoleculeNode;

use crate::trend::{summarize, TrendRecord, TrendSummary};

/// Ideal tetrahedral angle limit (degrees). Python: 109.471 in the
/// trend solver, 109.4712 in the water solver.
pub const THETA_TETRAHEDRAL: f64 = 109.4712;

/// Displacement mass of a boundary hydrogen node (u).
const M_HYDROGEN_U: f64 = 1.0078;

/// Pressure ratio of the perfectly balanced 4-node methane lock.
const BASELINE_LOCK: f64 = 2.9795;

/// Hydrostatic transfer coefficient: displacement asymmetry converts
/// to angular compression at ~99.8% efficiency.
const TRANSFER_COEFFICIENT: f64 = 0.998;

/// Maximum angular compression of a spherical node lattice (degrees).
const MAX_COMPRESSION_DEG: f64 = 15.0;

/// NIST H2O bond angle (degrees).
pub const REAL_H2O_DEG: f64 = 104.5;

/// Trend validation set: CH4 / NH3 / H2O.
pub const MOLECULES: [MoleculeNode; 3] = [
    MoleculeNode {
        name: "Methane (CH4)",
        central_mass_u: 12.011,
        hydrogen_nodes: 4,
        real_angle_deg: 109.5,
    },
    MoleculeNode {
        name: "Ammonia (NH3)",
        central_mass_u: 14.007,
        hydrogen_nodes: 3,
        real_angle_deg: 107.8,
    },
    MoleculeNode {
        name: "Water (H2O)",
        central_mass_u: 15.999,
        hydrogen_nodes: 2,
        real_angle_deg: 104.5,
    },
];

/// Water solver result (the first-principles variant).
#[derive(Debug, Clone, Copy)]
pub struct WaterAngle {
    /// Excess double-layer nodes over the pinned axes.
    pub excess_nodes: f64,
    /// Total displacement nodes across the 4 axes.
    pub total_nodes: f64,
    /// Angular crush applied by the medium (degrees).
    pub compression_deg: f64,
    /// Predicted H-O-H angle (degrees).
    pub predicted_deg: f64,
    pub accuracy_percent: f64,
}

/// Per-molecule trend prediction.
#[derive(Debug, Clone, Copy)]
pub struct AnglePrediction {
    /// Displacement pressure ratio of core vs boundary nodes.
    pub displacement_ratio: f64,
    /// Predicted bond angle (degrees).
    pub predicted_deg: f64,
}

/// Water: six outer displacement nodes on four structural axes
/// (1, 1, 2, 2); the double-layer surplus attracts a proportional
/// share of the 15° structural compression limit.
pub fn water_bond_angle() -> WaterAngle {
    let nodes_per_axis = [1.0, 1.0, 2.0, 2.0];
    let total_nodes: f64 = nodes_per_axis.iter().sum();

    // Surplus of the doubled axes over the hydrogen-pinned ones.
    let excess_nodes = (2.0 * 2.0) - (2.0 * 1.0);

    let compression_deg = MAX_COMPRESSION_DEG * (excess_nodes / total_nodes);
    let predicted_deg = THETA_TETRAHEDRAL - compression_deg;

    WaterAngle {
        excess_nodes,
        total_nodes,
        compression_deg,
        predicted_deg,
        accuracy_percent: accuracy_percent(predicted_deg, REAL_H2O_DEG),
    }
}

/// Trend variant: angle from the central-core displacement ratio
/// relative to the methane baseline lock.
pub fn molecular_angle(central_mass_u: f64, hydrogen_nodes: usize) -> AnglePrediction {
    let displacement_ratio = central_mass_u / (hydrogen_nodes as f64 * M_HYDROGEN_U);
    let distortion = TRANSFER_COEFFICIENT * (displacement_ratio - BASELINE_LOCK);

    AnglePrediction {
        displacement_ratio,
        predicted_deg: THETA_TETRAHEDRAL - distortion,
    }
}

/// Evaluate the CH4/NH3/H2O table for the trend comparator.
pub fn molecular_trend() -> (Vec<TrendRecord>, TrendSummary) {
    let records: Vec<TrendRecord> = MOLECULES
        .iter()
        .map(|m| {
            let p = molecular_angle(m.central_mass_u, m.hydrogen_nodes);
            TrendRecord::new(m.name, p.predicted_deg, m.real_angle_deg)
        })
        .collect();
    let summary = summarize(&records);
    (records, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_compression_is_five_degrees() {
        let w = water_bond_angle();
        assert!((w.compression_deg - 5.0).abs() < 1e-12);
        assert!((w.predicted_deg - 104.4712).abs() < 1e-9);
    }

    #[test]
    fn test_water_accuracy() {
        let w = water_bond_angle();
        assert!(
            w.accuracy_percent > 99.9,
            "Water angle accuracy: {}",
            w.accuracy_percent
        );
    }

    #[test]
    fn test_methane_sits_on_baseline() {
        // CH4 defines the baseline lock, so its distortion is ~0.
        let p = molecular_angle(12.011, 4);
        assert!((p.predicted_deg - THETA_TETRAHEDRAL).abs() < 1e-3);
    }

    #[test]
    fn test_trend_rows_near_experiment() {
        let (records, _) = molecular_trend();
        for r in &records {
            assert!(
                r.diff().abs() < 0.5,
                "{} predicted {} vs {}",
                r.label,
                r.predicted,
                r.observed
            );
        }
    }

    #[test]
    fn test_trend_statistics() {
        let (_, summary) = molecular_trend();
        assert!(
            summary.correlation > 0.999,
            "Correlation: {}",
            summary.correlation
        );
        assert!(summary.mean_abs_error < 0.1);
    }

    #[test]
    fn test_angle_decreases_with_core_mass() {
        // Heavier core at fewer pinning nodes crushes the angle more.
        let ch4 = molecular_angle(12.011, 4);
        let nh3 = molecular_angle(14.007, 3);
        let h2o = molecular_angle(15.999, 2);
        assert!(ch4.predicted_deg > nh3.predicted_deg);
        assert!(nh3.predicted_deg > h2o.predicted_deg);
    }
}
