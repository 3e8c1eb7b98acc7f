// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Solvers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PPT 3.0 closed-form validation solvers.
//!
//! Each module is a standalone leaf: it declares its calibration
//! literals, evaluates a fixed arithmetic sequence, and reports a
//! comparison against experimental reference values. There is no data
//! flow between modules.

pub mod binding;
pub mod bond_angle;
pub mod fission;
pub mod half_life;
pub mod ionization;
pub mod periodic;
pub mod pressure;
pub mod proton_radius;
pub mod relativistic;
pub mod spectral;
pub mod stability;
pub mod trend;
