// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Property-Based Tests (proptest) for ppt-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for ppt-math using proptest.
//!
//! Covers: accuracy idempotence, Pearson correlation on identical and
//! affine sequences, MAE, sphere volume monotonicity.

use ppt_math::geometry::{sphere_radius, sphere_volume};
use ppt_math::stats::{accuracy_percent, mean_absolute_error, pearson};
use proptest::prelude::*;

proptest! {
    /// accuracy_percent(e, e) = 100 for any nonzero e.
    #[test]
    fn accuracy_idempotent(e in prop::num::f64::NORMAL.prop_filter("nonzero", |v| v.abs() > 1e-100 && v.abs() < 1e100)) {
        let acc = accuracy_percent(e, e);
        prop_assert!((acc - 100.0).abs() < 1e-9, "accuracy({e}, {e}) = {acc}");
    }

    /// Accuracy never exceeds 100.
    #[test]
    fn accuracy_bounded_above(p in -1e6f64..1e6, r in 1e-3f64..1e6) {
        prop_assert!(accuracy_percent(p, r) <= 100.0 + 1e-9);
    }

    /// Identical sequences correlate at exactly 1 with zero MAE.
    #[test]
    fn identical_sequences_are_perfect(v in prop::collection::vec(-1e3f64..1e3, 3..32)) {
        // Require some spread, otherwise the correlation is degenerate.
        let spread = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - v.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assume!(spread > 1e-6);

        prop_assert!((pearson(&v, &v) - 1.0).abs() < 1e-9);
        prop_assert!(mean_absolute_error(&v, &v).abs() < 1e-12);
    }

    /// Pearson is invariant under positive affine transforms of one side.
    #[test]
    fn pearson_affine_invariant(
        v in prop::collection::vec(-1e3f64..1e3, 3..32),
        a in 0.1f64..10.0,
        b in -100.0f64..100.0,
    ) {
        let spread = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - v.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assume!(spread > 1e-3);

        let w: Vec<f64> = v.iter().map(|&x| a * x + b).collect();
        prop_assert!((pearson(&v, &w) - 1.0).abs() < 1e-6);
    }

    /// Sphere volume is strictly monotone in the radius.
    #[test]
    fn sphere_volume_monotone(r1 in 1e-16f64..1e-14, dr in 1e-18f64..1e-15) {
        prop_assert!(sphere_volume(r1 + dr) > sphere_volume(r1));
    }

    /// Radius/volume round-trip.
    #[test]
    fn sphere_roundtrip(r in 1e-16f64..1.0) {
        let back = sphere_radius(sphere_volume(r));
        prop_assert!((back - r).abs() / r < 1e-12);
    }
}
