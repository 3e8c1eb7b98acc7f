// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unified PPT 3.0 constants.
//!
//! The Python scripts re-declared these per file (with slightly drifting
//! precision on the MeV conversion). Hoisted here as the single source
//! of truth; CODATA precision is used everywhere.

/// Universal medium density (kg/m³), derived from R_0.
pub const RHO_MEDIUM: f64 = 2.3e17;

/// Maximum wave speed of the universal medium (m/s) - exact SI value.
pub const C_MEDIUM: f64 = 299_792_458.0;

/// Joules per MeV. Python drifts between 1.60218e-13 and 1.602176634e-13.
pub const JOULES_PER_MEV: f64 = 1.602176634e-13;

/// Joules per eV.
pub const JOULES_PER_EV: f64 = 1.602176634e-19;

/// 1 kiloton TNT in Joules.
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Seconds per year. Python: 3.154e7.
pub const SECONDS_PER_YEAR: f64 = 3.154e7;

/// PPT 3.0 muonic proton radius (m).
pub const R_NUCLEON: f64 = 0.8427e-15;

/// Nuclear saturation boundary r_0 (m), the acoustic hammering length.
pub const R_SATURATION: f64 = 1.25e-15;

/// Alpha packing volume defect fraction (2.223%), the Phi_ppt baseline.
pub const PHI_ALPHA_OVERLAP: f64 = 0.02223;

/// Alpha packing attenuation constant Phi_ppt, the same geometry
/// expressed as a dimensionless divisor (helium ionization lock).
pub const PHI_PPT: f64 = 2.223;

/// Alpha-Alpha triangular interface overlap for C-12 (0.153%).
pub const ALPHA_BOND_OVERLAP: f64 = 0.00153;

/// Ground state pinning tension of hydrogen at the n=1 boundary (eV).
pub const E_GROUND_HYDROGEN_EV: f64 = 13.605;

/// Golden ratio conjugate (sqrt(5) - 1) / 2, the zero-tension
/// shell-packing limit. Python: 0.6180339.
pub const PHI_CONJUGATE: f64 = 0.6180339;

/// Avogadro's number - exact SI value.
pub const AVOGADRO: f64 = 6.02214076e23;

/// Medium pinning pressure (Pa or J/m³): rho * c².
pub fn medium_pressure() -> f64 {
    RHO_MEDIUM * C_MEDIUM * C_MEDIUM
}
