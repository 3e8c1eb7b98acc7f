// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Relativistic Bow Shock
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Relativistic mass as fluid-dynamic bow-shock compression.
//!
//! Port of `Relativistic_Mass_Hydrostatic_Bow_Shock.py`.
//! The Lorentz factor and the Prandtl-Glauert compressibility factor
//! are the same function once c is read as the medium wave-speed
//! limit; the solver tabulates both to make the identity visible.

/// Velocity grid resolution. Python: 1000.
const GRID_POINTS: usize = 1000;

/// Upper clip keeps the grid off the v = c singularity.
const V_MAX: f64 = 0.999;

/// Tabulated comparison velocities. Python test_points.
pub const TEST_POINTS: [f64; 6] = [0.1, 0.5, 0.8, 0.9, 0.95, 0.99];

/// Lorentz factor γ = 1 / √(1 − (v/c)²).
pub fn lorentz_factor(mach: f64) -> f64 {
    1.0 / (1.0 - mach * mach).sqrt()
}

/// Prandtl-Glauert compressibility factor, identical in form.
pub fn prandtl_glauert_factor(mach: f64) -> f64 {
    1.0 / (1.0 - mach * mach).sqrt()
}

/// One row of the comparison table.
#[derive(Debug, Clone, Copy)]
pub struct BowShockRow {
    pub mach: f64,
    pub lorentz: f64,
    pub prandtl_glauert: f64,
    pub difference: f64,
}

/// Velocity grid and both factor curves for charting.
#[derive(Debug, Clone)]
pub struct BowShockCurve {
    pub mach: Vec<f64>,
    pub lorentz: Vec<f64>,
    pub prandtl_glauert: Vec<f64>,
}

/// Sample both factors on the clipped [0, 0.999] grid.
pub fn bow_shock_curve() -> BowShockCurve {
    let mach: Vec<f64> = (0..GRID_POINTS)
        .map(|i| V_MAX * i as f64 / (GRID_POINTS - 1) as f64)
        .collect();
    let lorentz: Vec<f64> = mach.iter().map(|&v| lorentz_factor(v)).collect();
    let prandtl_glauert: Vec<f64> = mach.iter().map(|&v| prandtl_glauert_factor(v)).collect();

    BowShockCurve {
        mach,
        lorentz,
        prandtl_glauert,
    }
}

/// Evaluate the identity at the tabulated test velocities.
pub fn comparison_table() -> Vec<BowShockRow> {
    TEST_POINTS
        .iter()
        .map(|&v| {
            let lorentz = lorentz_factor(v);
            let prandtl_glauert = prandtl_glauert_factor(v);
            BowShockRow {
                mach: v,
                lorentz,
                prandtl_glauert,
                difference: (lorentz - prandtl_glauert).abs(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_factor_is_unity() {
        assert!((lorentz_factor(0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_known_gamma() {
        // γ(0.8) = 1/√0.36 = 5/3.
        assert!((lorentz_factor(0.8) - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_holds_everywhere() {
        for row in comparison_table() {
            assert!(
                row.difference < 1e-15,
                "Factors diverge at v = {}: {}",
                row.mach,
                row.difference
            );
        }
    }

    #[test]
    fn test_curve_monotone_and_finite() {
        let curve = bow_shock_curve();
        assert_eq!(curve.mach.len(), GRID_POINTS);
        for w in curve.lorentz.windows(2) {
            assert!(w[1] >= w[0], "γ must be monotone on [0, 0.999]");
        }
        assert!(curve.lorentz.last().unwrap().is_finite());
    }
}
