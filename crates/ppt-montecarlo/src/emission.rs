// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Emission Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Alpha emission direction samplers.
//!
//! Port of `Fasifiable_Cleavage_And_Alpha_Decay.py`.
//! Model A: isotropic quantum tunneling — uniform azimuth, uniform
//! cos θ (the correct uniform-sphere method; uniform θ would bias
//! toward the poles). Model B: PPT geometric cleavage — emission off
//! the four tetrahedral fault lines with Gaussian vibrational noise.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

/// Simulated emission events. Python: 5000.
pub const N_EVENTS: usize = 5000;

/// Vibrational noise σ per axis. Python: 0.15.
pub const CLEAVAGE_NOISE_SIGMA: f64 = 0.15;

/// Tetrahedral fault-line vertices, normalized to unit length
/// (each raw vertex is (±1, ±1, ±1)/√3).
pub const TETRA_VERTICES: [[f64; 3]; 4] = [
    [0.5773502691896258, 0.5773502691896258, 0.5773502691896258],
    [-0.5773502691896258, -0.5773502691896258, 0.5773502691896258],
    [-0.5773502691896258, 0.5773502691896258, -0.5773502691896258],
    [0.5773502691896258, -0.5773502691896258, -0.5773502691896258],
];

/// Euclidean norm of a direction vector.
pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Model A: N isotropic unit vectors.
///
/// Azimuth φ ~ U[0, 2π), cos θ ~ U[−1, 1], converted to Cartesian.
pub fn sample_isotropic<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<[f64; 3]> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let phi: f64 = rng.gen_range(0.0..TAU);
        let cos_theta: f64 = rng.gen_range(-1.0..=1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        out.push([
            sin_theta * phi.cos(),
            sin_theta * phi.sin(),
            cos_theta,
        ]);
    }
    out
}

/// Model B: N anisotropic cleavage vectors.
///
/// Each event fractures off a uniformly chosen tetrahedral fault
/// line, perturbed by independent zero-mean Gaussian noise per axis,
/// then renormalized back to the emission sphere.
pub fn sample_cleavage<R: Rng + ?Sized>(rng: &mut R, n: usize, noise_sigma: f64) -> Vec<[f64; 3]> {
    let noise = Normal::new(0.0, noise_sigma).unwrap();

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let base = TETRA_VERTICES[rng.gen_range(0..TETRA_VERTICES.len())];
        let fracture = [
            base[0] + noise.sample(rng),
            base[1] + noise.sample(rng),
            base[2] + noise.sample(rng),
        ];

        let len = norm(fracture);
        out.push([fracture[0] / len, fracture[1] / len, fracture[2] / len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_isotropic_vectors_are_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for v in sample_isotropic(&mut rng, 1000) {
            assert!((norm(v) - 1.0).abs() < 1e-12, "Non-unit vector: {v:?}");
        }
    }

    #[test]
    fn test_isotropic_mean_z_vanishes() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_isotropic(&mut rng, N_EVENTS);
        let mean_z: f64 = samples.iter().map(|v| v[2]).sum::<f64>() / N_EVENTS as f64;
        // σ of the mean is √(1/3)/√N ≈ 0.008 at N = 5000.
        assert!(mean_z.abs() < 0.05, "Mean z biased: {mean_z}");
    }

    #[test]
    fn test_isotropic_hemispheres_balanced() {
        let mut rng = StdRng::seed_from_u64(99);
        let samples = sample_isotropic(&mut rng, N_EVENTS);
        let north = samples.iter().filter(|v| v[2] > 0.0).count();
        let frac = north as f64 / N_EVENTS as f64;
        assert!((frac - 0.5).abs() < 0.05, "Hemisphere split: {frac}");
    }

    #[test]
    fn test_cleavage_vectors_are_unit() {
        let mut rng = StdRng::seed_from_u64(3);
        for v in sample_cleavage(&mut rng, 1000, CLEAVAGE_NOISE_SIGMA) {
            assert!((norm(v) - 1.0).abs() < 1e-12, "Non-unit vector: {v:?}");
        }
    }

    #[test]
    fn test_cleavage_clusters_on_fault_lines() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples = sample_cleavage(&mut rng, N_EVENTS, CLEAVAGE_NOISE_SIGMA);

        // Every sample should sit close to its nearest vertex; at
        // σ = 0.15 the angular spread stays well under 90°.
        for v in &samples {
            let best = TETRA_VERTICES
                .iter()
                .map(|t| v[0] * t[0] + v[1] * t[1] + v[2] * t[2])
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(best > 0.0, "Sample {v:?} not aligned with any fault line");
        }
    }

    #[test]
    fn test_tetra_vertices_are_unit() {
        for v in TETRA_VERTICES {
            assert!((norm(v) - 1.0).abs() < 1e-12);
        }
    }
}
