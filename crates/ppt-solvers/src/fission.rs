// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Fission Cavitation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! U-235 fission as hydrostatic cavitation.
//!
//! Port of `U235_Fission_Cavitation_Solver.py`.
//! The fission products pack tighter than the parent lattice; the
//! medium collapses into the vacated volume and the collapse energy is
//! the observed yield.

use ppt_types::config::MediumConfig;
use ppt_types::constants::{AVOGADRO, JOULES_PER_KILOTON, JOULES_PER_MEV};

use crate::pressure::defect_volume_m3;

/// Structural tension of the U-235 parent lattice (MeV). Python: 1783.8.
const E_U235_MEV: f64 = 1783.8;

/// Ba-141 product lattice tension (MeV). Python: 1173.4.
const E_BA141_MEV: f64 = 1173.4;

/// Kr-92 product lattice tension (MeV). Python: 782.6.
const E_KR92_MEV: f64 = 782.6;

/// U-235 molar mass (kg/mol).
const U235_MOLAR_MASS_KG: f64 = 0.235;

/// Observed Little Boy yield band (kilotons of TNT).
const HISTORICAL_YIELD_KT: (f64, f64) = (14.0, 18.0);

/// Result of the cavitation calculation.
#[derive(Debug, Clone, Copy)]
pub struct FissionCavitation {
    /// Cavitation void created per fracture (m³).
    pub void_volume_m3: f64,
    /// Kinetic energy release per atom (MeV).
    pub atom_release_mev: f64,
    /// Fracture events in 1 kg of U-235.
    pub atoms_per_kg: f64,
    /// Macro shockwave energy of 1 kg (J).
    pub kg_release_j: f64,
    /// Macro yield of 1 kg (kilotons of TNT).
    pub yield_kilotons: f64,
    /// True when the yield lands in the observed 14-18 kt band.
    pub macro_validated: bool,
}

/// Solve the one-atom cavitation void and scale it to 1 kg of
/// simultaneously fissioning U-235.
pub fn u235_cavitation(cfg: &MediumConfig) -> FissionCavitation {
    let pressure = cfg.pressure();

    // Geometric defect volumes of parent and product lattices.
    let dv_u235 = defect_volume_m3(pressure, E_U235_MEV * JOULES_PER_MEV);
    let dv_ba141 = defect_volume_m3(pressure, E_BA141_MEV * JOULES_PER_MEV);
    let dv_kr92 = defect_volume_m3(pressure, E_KR92_MEV * JOULES_PER_MEV);

    // The products pack tighter: their combined defect exceeds the
    // parent's, and the medium snaps inward by the difference.
    let dv_shift = (dv_ba141 + dv_kr92) - dv_u235;

    let atom_release_j = pressure * dv_shift;
    let atom_release_mev = atom_release_j / JOULES_PER_MEV;

    let atoms_per_kg = AVOGADRO / U235_MOLAR_MASS_KG;
    let kg_release_j = atom_release_j * atoms_per_kg;
    let yield_kilotons = kg_release_j / JOULES_PER_KILOTON;

    FissionCavitation {
        void_volume_m3: dv_shift,
        atom_release_mev,
        atoms_per_kg,
        kg_release_j,
        yield_kilotons,
        macro_validated: yield_kilotons > HISTORICAL_YIELD_KT.0
            && yield_kilotons < HISTORICAL_YIELD_KT.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_release_is_tension_difference() {
        let f = u235_cavitation(&MediumConfig::default());
        // Pressure cancels: release = (1173.4 + 782.6) - 1783.8 MeV.
        let expected = E_BA141_MEV + E_KR92_MEV - E_U235_MEV;
        assert!(
            (f.atom_release_mev - expected).abs() < 1e-9,
            "Per-atom release {} != {}",
            f.atom_release_mev,
            expected
        );
    }

    #[test]
    fn test_void_is_positive() {
        let f = u235_cavitation(&MediumConfig::default());
        assert!(f.void_volume_m3 > 0.0, "Products must pack tighter");
    }

    #[test]
    fn test_macro_yield_matches_history() {
        let f = u235_cavitation(&MediumConfig::default());
        assert!(
            f.macro_validated,
            "1 kg yield {} kt outside the 14-18 kt band",
            f.yield_kilotons
        );
    }

    #[test]
    fn test_atoms_per_kg() {
        let f = u235_cavitation(&MediumConfig::default());
        assert!((f.atoms_per_kg - 2.5626e24).abs() / 2.5626e24 < 1e-3);
    }
}
