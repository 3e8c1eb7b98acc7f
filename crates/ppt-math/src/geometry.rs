// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spherical volume geometry shared by the nuclear solvers.

use std::f64::consts::PI;

/// Volume of a sphere: V = (4/3) π r³.
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Radius recovered from a spherical volume (inverse of `sphere_volume`).
pub fn sphere_radius(volume: f64) -> f64 {
    (volume * 3.0 / (4.0 * PI)).cbrt()
}

/// Cube-root volume scaling: maps a 3D volume back to a 1D radial
/// measurement when the volume is expressed in radius-cubed units
/// (proton radius solver convention, fm³ → fm).
pub fn radial_from_cubed(volume_r3: f64) -> f64 {
    volume_r3.cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_sphere() {
        let v = sphere_volume(1.0);
        assert!((v - 4.18879020478639).abs() < 1e-12);
    }

    #[test]
    fn test_radius_roundtrip() {
        let r = 0.8427e-15;
        let v = sphere_volume(r);
        assert!((sphere_radius(v) - r).abs() < 1e-28);
    }

    #[test]
    fn test_volume_scales_with_cube() {
        let v1 = sphere_volume(1.0);
        let v2 = sphere_volume(2.0);
        assert!((v2 / v1 - 8.0).abs() < 1e-12);
    }
}
