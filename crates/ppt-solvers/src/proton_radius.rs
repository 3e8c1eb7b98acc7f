// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Proton Radius
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The proton radius puzzle as hydrostatic compression.
//!
//! Port of `Proton_Radius_Hydrostatic_Solver.py`.
//! The orbiter's displaced volume squeezes the proton resonance
//! bubble by exactly the orbiter/proton mass ratio; electron and muon
//! probes therefore measure different radii of the same object.

use ppt_math::geometry::radial_from_cubed;
use ppt_math::stats::accuracy_percent;

/// Proton displacement mass (MeV/c²). Python: 938.272088.
const M_PROTON: f64 = 938.272088;

/// Electron displacement mass (MeV/c²). Python: 0.510998.
const M_ELECTRON: f64 = 0.510998;

/// Muon displacement mass (MeV/c²). Python: 105.658375.
const M_MUON: f64 = 105.658375;

/// Historical CODATA electron-probed radius (fm).
const R_MEASURED_ELECTRON_FM: f64 = 0.8768;

/// Muonic hydrogen measurement (fm).
pub const REAL_MUON_RADIUS_FM: f64 = 0.8418;

/// Script threshold for the puzzle-solved conclusion (fm).
const PUZZLE_THRESHOLD_FM: f64 = 0.005;

/// Compression chain result.
#[derive(Debug, Clone, Copy)]
pub struct ProtonRadius {
    /// Electron displacement pressure ratio (~0.054%).
    pub electron_compression: f64,
    /// Muon displacement pressure ratio (~11.26%).
    pub muon_compression: f64,
    /// Zero-state uncompressed radius (fm).
    pub zero_state_radius_fm: f64,
    /// Predicted muon-squeezed radius (fm).
    pub muonic_radius_fm: f64,
    /// Accuracy against the muonic measurement.
    pub accuracy_percent: f64,
    /// True when the prediction lands within 0.005 fm.
    pub puzzle_solved: bool,
}

/// Reverse-engineer the zero-state proton volume from the historical
/// electronic measurement, then apply the muonic squeeze.
pub fn solve_proton_radius() -> ProtonRadius {
    let electron_compression = M_ELECTRON / M_PROTON;
    let muon_compression = M_MUON / M_PROTON;

    // Volume scales with the cube of the radius (fm³ in r³ units).
    let v_measured_e = R_MEASURED_ELECTRON_FM.powi(3);

    // Remove the electron squeeze to recover the uncompressed bubble.
    let v_zero_state = v_measured_e / (1.0 - electron_compression);

    // Apply the muon squeeze and return to a radial measurement.
    let v_muon = v_zero_state * (1.0 - muon_compression);
    let muonic_radius_fm = radial_from_cubed(v_muon);

    ProtonRadius {
        electron_compression,
        muon_compression,
        zero_state_radius_fm: radial_from_cubed(v_zero_state),
        muonic_radius_fm,
        accuracy_percent: accuracy_percent(muonic_radius_fm, REAL_MUON_RADIUS_FM),
        puzzle_solved: (muonic_radius_fm - REAL_MUON_RADIUS_FM).abs() < PUZZLE_THRESHOLD_FM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratios() {
        let p = solve_proton_radius();
        assert!((p.electron_compression - 5.446e-4).abs() / 5.446e-4 < 1e-3);
        assert!((p.muon_compression - 0.11261).abs() < 1e-4);
    }

    #[test]
    fn test_muonic_radius_within_threshold() {
        let p = solve_proton_radius();
        assert!(
            p.puzzle_solved,
            "Muonic radius {} fm misses {} by more than 0.005",
            p.muonic_radius_fm, REAL_MUON_RADIUS_FM
        );
    }

    #[test]
    fn test_zero_state_exceeds_measured() {
        let p = solve_proton_radius();
        // Removing the electron squeeze can only enlarge the bubble.
        assert!(p.zero_state_radius_fm > R_MEASURED_ELECTRON_FM);
        // And the muon squeezes it far below both.
        assert!(p.muonic_radius_fm < R_MEASURED_ELECTRON_FM);
    }
}
