// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Nuclear Binding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Geometric nuclear binding energy solvers.
//!
//! Port of `Helium4_Nuclear_Binding_Solver.py` and
//! `Carbon12_Alpha_Cluster_Solver.py`.
//! Binding energy is the volume defect of tight-packed nucleons
//! crushed out by the medium pressure.

use ppt_math::geometry::sphere_volume;
use ppt_math::stats::accuracy_percent;
use ppt_types::config::MediumConfig;
use ppt_types::constants::{ALPHA_BOND_OVERLAP, JOULES_PER_MEV};

use crate::pressure::evaluate_defect;

/// Nucleons in a He-4 alpha cluster.
const HE4_NUCLEONS: f64 = 4.0;

/// Nucleons in C-12 (three alpha clusters).
const C12_NUCLEONS: f64 = 12.0;

/// Alpha clusters in the C-12 equilateral triangle.
const C12_CLUSTERS: f64 = 3.0;

/// Observed He-4 binding energy (MeV).
pub const REAL_HE4_MEV: f64 = 28.3;

/// Observed C-12 binding energy (MeV).
pub const REAL_C12_MEV: f64 = 92.16;

/// Script threshold for the C-12 fractal-scaling conclusion (MeV).
const C12_MATCH_THRESHOLD_MEV: f64 = 0.5;

/// He-4 binding result.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBinding {
    /// Raw uncompressed 4-nucleon volume (m³).
    pub raw_volume_m3: f64,
    /// Tetrahedral packing volume defect (m³).
    pub defect_volume_m3: f64,
    /// Predicted binding energy (MeV).
    pub energy_mev: f64,
    /// Accuracy against the observed 28.3 MeV.
    pub accuracy_percent: f64,
}

/// C-12 alpha-cluster binding result.
#[derive(Debug, Clone, Copy)]
pub struct Carbon12Binding {
    /// Raw uncompressed 12-nucleon volume (m³).
    pub raw_volume_m3: f64,
    /// Total volume defect: internal tetrahedrons + triangular interface (m³).
    pub defect_volume_m3: f64,
    /// Energy from the three internal He-4 tetrahedrons (MeV).
    pub cluster_energy_mev: f64,
    /// Energy from the Alpha-Alpha triangular interface (MeV).
    pub interface_energy_mev: f64,
    /// Total predicted binding energy (MeV).
    pub total_energy_mev: f64,
    /// Accuracy against the observed 92.16 MeV.
    pub accuracy_percent: f64,
    /// True when |E − 92.16| < 0.5 MeV (fractal scaling confirmed).
    pub fractal_scaling_ok: bool,
}

/// Solve the He-4 binding energy purely from the geometric volume
/// defect of 4 tetrahedrally packed nucleons.
pub fn helium4_binding(cfg: &MediumConfig) -> AlphaBinding {
    let v_raw = HE4_NUCLEONS * sphere_volume(cfg.nucleon_radius_m);
    let eval = evaluate_defect(cfg, v_raw, cfg.alpha_overlap_fraction, JOULES_PER_MEV);

    AlphaBinding {
        raw_volume_m3: eval.raw_volume_m3,
        defect_volume_m3: eval.defect_volume_m3,
        energy_mev: eval.energy_scaled,
        accuracy_percent: accuracy_percent(eval.energy_scaled, REAL_HE4_MEV),
    }
}

/// Solve the C-12 binding energy via three He-4 clusters locked into
/// an equilateral triangle: primary internal tetrahedral defects plus
/// a secondary 0.153% Alpha-Alpha interface overlap.
pub fn carbon12_binding(cfg: &MediumConfig) -> Carbon12Binding {
    let v_nucleon = sphere_volume(cfg.nucleon_radius_m);
    let v_raw_he4 = HE4_NUCLEONS * v_nucleon;
    let v_raw_c12 = C12_NUCLEONS * v_nucleon;

    // Primary defect: three separate internal tetrahedral overlaps.
    let dv_clusters = C12_CLUSTERS * v_raw_he4 * cfg.alpha_overlap_fraction;

    // Secondary defect: the clusters' external boundaries compress
    // against each other across the carbon triangle.
    let dv_bonds = v_raw_c12 * ALPHA_BOND_OVERLAP;

    let pressure = cfg.pressure();
    let cluster_energy_mev = pressure * dv_clusters / JOULES_PER_MEV;
    let interface_energy_mev = pressure * dv_bonds / JOULES_PER_MEV;
    let total = cluster_energy_mev + interface_energy_mev;

    Carbon12Binding {
        raw_volume_m3: v_raw_c12,
        defect_volume_m3: dv_clusters + dv_bonds,
        cluster_energy_mev,
        interface_energy_mev,
        total_energy_mev: total,
        accuracy_percent: accuracy_percent(total, REAL_C12_MEV),
        fractal_scaling_ok: (total - REAL_C12_MEV).abs() < C12_MATCH_THRESHOLD_MEV,
    }
}
