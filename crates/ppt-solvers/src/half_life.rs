// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Acoustic Half-Life
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic half-life from acoustic fatigue.
//!
//! Port of `Deterministic_Half_Life_Acoustic_Solver.py`.
//! The medium hammers the displacement volume at f = c / r_0; a
//! geometric lattice attenuates the strikes exponentially, and the
//! half-life is the mean time to structural fracture.

use ppt_math::stats::accuracy_percent;
use ppt_types::config::MediumConfig;
use ppt_types::constants::SECONDS_PER_YEAR;
use ppt_types::elements::IsotopeLock;

/// Calibrated isotope impedance profiles. The lock factors are opaque
/// attenuation barriers, reproduced exactly.
pub const ISOTOPES: [IsotopeLock; 2] = [
    IsotopeLock {
        // Incomplete tetrahedral core, low attenuation barrier.
        name: "Tritium (3H)",
        lock_factor: 73.6146,
        real_half_life_yr: 12.32,
    },
    IsotopeLock {
        // Protected by the massive C-12 alpha triangle.
        name: "Carbon-14 (14C)",
        lock_factor: 79.7656,
        real_half_life_yr: 5730.0,
    },
];

/// One row of the half-life validation table.
#[derive(Debug, Clone, Copy)]
pub struct HalfLifeRow {
    pub isotope: IsotopeLock,
    /// Predicted half-life (years).
    pub predicted_yr: f64,
    /// Accuracy against the NIST half-life.
    pub accuracy_percent: f64,
}

/// Mean time to fracture in years:
/// t½ = (1 / f_medium) · exp(lock_factor) / seconds_per_year.
pub fn predicted_half_life_yr(cfg: &MediumConfig, lock_factor: f64) -> f64 {
    let t_seconds = lock_factor.exp() / cfg.impact_frequency();
    t_seconds / SECONDS_PER_YEAR
}

/// Evaluate the full isotope table.
pub fn half_life_table(cfg: &MediumConfig) -> Vec<HalfLifeRow> {
    ISOTOPES
        .iter()
        .map(|&isotope| {
            let predicted_yr = predicted_half_life_yr(cfg, isotope.lock_factor);
            HalfLifeRow {
                isotope,
                predicted_yr,
                accuracy_percent: accuracy_percent(predicted_yr, isotope.real_half_life_yr),
            }
        })
        .collect()
}

/// Structural integrity curve for the fatigue chart:
/// N(t) = 100 · exp(−t · ln 2 / t½), sampled at the given times.
pub fn integrity_curve(half_life_yr: f64, t_years: &[f64]) -> Vec<f64> {
    t_years
        .iter()
        .map(|&t| 100.0 * (-t * std::f64::consts::LN_2 / half_life_yr).exp())
        .collect()
}
