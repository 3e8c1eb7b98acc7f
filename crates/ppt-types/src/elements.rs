// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Element Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Small labeled records used by the table-driven solvers.
//!
//! Built fresh on each run and discarded after printing; nothing here
//! has a lifecycle beyond compute-print-exit.

/// Acoustic impedance profile of one isotope.
///
/// The lock factor is an empirically calibrated attenuation barrier
/// with no closed-form derivation; it is reproduced, not re-derived.
#[derive(Debug, Clone, Copy)]
pub struct IsotopeLock {
    pub name: &'static str,
    /// Structural attenuation barrier against acoustic fracture.
    pub lock_factor: f64,
    /// NIST half-life (years).
    pub real_half_life_yr: f64,
}

/// One element of a periodic packing trend.
#[derive(Debug, Clone, Copy)]
pub struct ElementNode {
    pub symbol: &'static str,
    /// Outer displacement nodes on the boundary shell (1-8).
    pub outer_nodes: usize,
    /// Geometric symmetry tensor (Vector Equilibrium calibration).
    pub packing_tensor: f64,
    /// PPT geometric state label.
    pub geometry: &'static str,
    /// NIST first ionization energy (eV).
    pub real_ionization_ev: f64,
}

/// One molecule of the bond-angle compression trend.
#[derive(Debug, Clone, Copy)]
pub struct MoleculeNode {
    pub name: &'static str,
    /// Displacement mass of the central core (u).
    pub central_mass_u: f64,
    /// Number of boundary hydrogen nodes pinning the structure.
    pub hydrogen_nodes: usize,
    /// NIST bond angle (degrees).
    pub real_angle_deg: f64,
}
