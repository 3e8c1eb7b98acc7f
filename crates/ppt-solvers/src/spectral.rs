// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Spectral Transitions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Hydrogen spectral lines as harmonic pressure node transitions.
//!
//! Port of `Spectral_Transitions_Harmonic_Solver.py`.
//! Moving between harmonic boundaries releases the tension difference
//! E_base · (1/n_low² − 1/n_high²).

use ppt_types::constants::E_GROUND_HYDROGEN_EV;

/// A named transition with its experimental reference (eV).
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub name: &'static str,
    pub n_low: u32,
    pub n_high: u32,
    pub experimental_ev: f64,
}

/// The reported series validation set.
pub const SERIES: [Transition; 3] = [
    Transition {
        name: "Lyman-Alpha",
        n_low: 1,
        n_high: 2,
        experimental_ev: 10.20,
    },
    Transition {
        name: "Lyman-Beta",
        n_low: 1,
        n_high: 3,
        experimental_ev: 12.09,
    },
    Transition {
        name: "Balmer-Alpha",
        n_low: 2,
        n_high: 3,
        experimental_ev: 1.89,
    },
];

/// Tension released between two harmonic pressure boundaries.
/// Non-ascending transitions release nothing (original semantics).
pub fn transition_energy_ev(n_low: u32, n_high: u32, e_base_ev: f64) -> f64 {
    if n_high <= n_low {
        return 0.0;
    }
    let low = f64::from(n_low);
    let high = f64::from(n_high);
    e_base_ev * (1.0 / (low * low) - 1.0 / (high * high))
}

/// Evaluate the full series against the hydrogen ground tension.
pub fn series_energies_ev() -> Vec<(Transition, f64)> {
    SERIES
        .iter()
        .map(|&t| (t, transition_energy_ev(t.n_low, t.n_high, E_GROUND_HYDROGEN_EV)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lyman_alpha_exact() {
        // 0.75 × 13.605 = 10.20375 eV, exactly.
        let e = transition_energy_ev(1, 2, 13.605);
        assert!((e - 10.20375).abs() < 1e-12, "Lyman-α: {e}");
    }

    #[test]
    fn test_lyman_beta() {
        let e = transition_energy_ev(1, 3, E_GROUND_HYDROGEN_EV);
        assert!((e - 12.09).abs() < 0.01);
    }

    #[test]
    fn test_balmer_alpha() {
        let e = transition_energy_ev(2, 3, E_GROUND_HYDROGEN_EV);
        assert!((e - 1.89).abs() < 0.01);
    }

    #[test]
    fn test_non_ascending_releases_nothing() {
        assert_eq!(transition_energy_ev(2, 2, 13.605), 0.0);
        assert_eq!(transition_energy_ev(3, 1, 13.605), 0.0);
    }

    #[test]
    fn test_series_matches_experiment() {
        for (t, e) in series_energies_ev() {
            assert!(
                (e - t.experimental_ev).abs() < 0.01,
                "{}: {} vs {}",
                t.name,
                e,
                t.experimental_ev
            );
        }
    }
}
