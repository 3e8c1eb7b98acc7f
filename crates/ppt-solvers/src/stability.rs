// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Island of Stability
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Island of stability from golden-ratio shell packing.
//!
//! Port of `Flerovium_Island_of_Stability_Solver.py`.
//! A zero-tension outer shell needs its padding neutrons scaled by the
//! golden ratio conjugate; the isotope closest to that limit is the
//! most stable one.

use ppt_types::constants::PHI_CONJUGATE;

/// Proton count of Flerovium. Python: Z = 114.
pub const Z_FLEROVIUM: usize = 114;

/// Neutron scan range. Python: np.arange(175, 190).
const N_SCAN: std::ops::Range<usize> = 175..190;

/// Window of isotopes reported around the island. Python: 182..=186.
const REPORT_WINDOW: (usize, usize) = (182, 186);

/// Standard-physics magic neutron number for comparison.
pub const MAGIC_N: usize = 184;

/// Lattice tension of one candidate isotope.
#[derive(Debug, Clone, Copy)]
pub struct IsotopeTension {
    /// Total neutrons.
    pub neutrons: usize,
    /// Neutrons left over for the outer hydrostatic shield.
    pub padding_neutrons: isize,
    /// Absolute variance from the golden packing limit.
    pub tension: f64,
}

/// Full scan result.
#[derive(Debug, Clone)]
pub struct StabilityScan {
    /// Ideal padding neutron count Z · (phi − 1).
    pub ideal_padding: f64,
    /// Tension rows in the reported island window.
    pub window: Vec<IsotopeTension>,
    /// Neutron count with the lowest lattice tension.
    pub best_n: usize,
    /// Tension of the best isotope.
    pub lowest_tension: f64,
}

/// Scan candidate neutron counts for the minimum hydrostatic lattice
/// tension. Core neutrons complete the internal alpha clusters (one
/// per proton); the remainder pads the outer shield.
pub fn flerovium_scan() -> StabilityScan {
    let z = Z_FLEROVIUM;
    let ideal_padding = z as f64 * PHI_CONJUGATE;

    let mut window = Vec::new();
    let mut best_n = 0;
    let mut lowest_tension = f64::INFINITY;

    for n in N_SCAN {
        let padding = n as isize - z as isize;
        let tension = (ideal_padding - padding as f64).abs();

        if tension < lowest_tension {
            lowest_tension = tension;
            best_n = n;
        }

        if (REPORT_WINDOW.0..=REPORT_WINDOW.1).contains(&n) {
            window.push(IsotopeTension {
                neutrons: n,
                padding_neutrons: padding,
                tension,
            });
        }
    }

    StabilityScan {
        ideal_padding,
        window,
        best_n,
        lowest_tension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_island_lands_on_magic_number() {
        let scan = flerovium_scan();
        assert_eq!(
            scan.best_n, MAGIC_N,
            "Golden packing must reproduce N = 184"
        );
    }

    #[test]
    fn test_ideal_padding() {
        let scan = flerovium_scan();
        assert!((scan.ideal_padding - 70.456).abs() < 1e-3);
    }

    #[test]
    fn test_lowest_tension_is_minimal() {
        let scan = flerovium_scan();
        assert!(scan.lowest_tension < 0.5);
        for row in &scan.window {
            assert!(row.tension + 1e-12 >= scan.lowest_tension);
        }
    }

    #[test]
    fn test_window_rows() {
        let scan = flerovium_scan();
        assert_eq!(scan.window.len(), 5);
        assert_eq!(scan.window[0].neutrons, 182);
        assert_eq!(scan.window[4].neutrons, 186);
        // Padding neutrons are total minus the alpha-cluster core.
        assert_eq!(scan.window[0].padding_neutrons, 68);
    }
}
