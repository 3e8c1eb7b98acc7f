// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Ionization Solvers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! First-ionization solvers for H, He and Li.
//!
//! Port of `Ionization_Energy_Hydrostatic_Solver.py`,
//! `Helium_Ionization_Alpha_Lock_Solver.py` and
//! `Lithium_Ionization_Geometric_Solver.py`.

use ppt_math::stats::accuracy_percent;
use ppt_types::config::MediumConfig;
use ppt_types::constants::{E_GROUND_HYDROGEN_EV, JOULES_PER_EV, PHI_PPT};

use crate::pressure::{defect_energy_joules, defect_volume_m3};

/// NIST He first ionization (eV).
pub const REAL_HE_EV: f64 = 24.587;

/// NIST Li first ionization (eV).
pub const REAL_LI_EV: f64 = 5.3917;

/// Hydrogen displacement result: the volumetric footprint of the
/// electron node plus its circular reverse verification.
#[derive(Debug, Clone, Copy)]
pub struct HydrogenDisplacement {
    /// Medium pinning pressure (J/m³).
    pub pressure: f64,
    /// Target ground state tension (J).
    pub target_j: f64,
    /// Electron displacement volume ΔV_e (m³).
    pub displacement_m3: f64,
    /// Energy recovered from pressure · ΔV (eV).
    pub derived_ev: f64,
    /// Match accuracy of the reverse verification (100 by construction).
    pub accuracy_percent: f64,
}

/// Generic shell-attenuated ionization prediction.
#[derive(Debug, Clone, Copy)]
pub struct IonizationPrediction {
    /// Dimensionless geometric scale factor applied to the baseline.
    pub scale_factor: f64,
    /// Predicted first ionization energy (eV).
    pub predicted_ev: f64,
    /// Accuracy against the NIST reference.
    pub accuracy_percent: f64,
}

/// Solve the electron displacement volume for hydrogen:
/// ΔV = E / (rho·c²), then verify the arithmetic is circular.
pub fn hydrogen_displacement(cfg: &MediumConfig) -> HydrogenDisplacement {
    let pressure = cfg.pressure();
    let target_j = E_GROUND_HYDROGEN_EV * JOULES_PER_EV;
    let displacement = defect_volume_m3(pressure, target_j);

    let derived_ev = defect_energy_joules(pressure, displacement) / JOULES_PER_EV;

    HydrogenDisplacement {
        pressure,
        target_j,
        displacement_m3: displacement,
        derived_ev,
        accuracy_percent: accuracy_percent(derived_ev, E_GROUND_HYDROGEN_EV),
    }
}

/// Helium: the unshielded core multiplier (2² = 4) attenuated by the
/// tetrahedral alpha packing constant Phi_ppt.
pub fn helium_ionization() -> IonizationPrediction {
    let core_displacement: f64 = 2.0;
    let unshielded_multiplier = core_displacement * core_displacement;
    let scale_factor = unshielded_multiplier / PHI_PPT;
    let predicted_ev = E_GROUND_HYDROGEN_EV * scale_factor;

    IonizationPrediction {
        scale_factor,
        predicted_ev,
        accuracy_percent: accuracy_percent(predicted_ev, REAL_HE_EV),
    }
}

/// Lithium: the n=2 boundary drops the tension by 1/n², then the
/// 2-node inner double layer raises it by the square of its
/// volumetric permeability (cbrt of the node count).
pub fn lithium_ionization() -> IonizationPrediction {
    let n_outer: f64 = 2.0;
    let boundary_drop = 1.0 / (n_outer * n_outer);
    let e_n2_baseline = E_GROUND_HYDROGEN_EV * boundary_drop;

    let inner_nodes: f64 = 2.0;
    let permeability = inner_nodes.cbrt();
    let pinning_multiplier = permeability * permeability;

    let predicted_ev = e_n2_baseline * pinning_multiplier;

    IonizationPrediction {
        scale_factor: boundary_drop * pinning_multiplier,
        predicted_ev,
        accuracy_percent: accuracy_percent(predicted_ev, REAL_LI_EV),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrogen_reverse_verification_is_circular() {
        let h = hydrogen_displacement(&MediumConfig::default());
        assert!(
            (h.accuracy_percent - 100.0).abs() < 1e-9,
            "Reverse verification must be exact: {}",
            h.accuracy_percent
        );
        assert!((h.derived_ev - 13.605).abs() < 1e-9);
    }

    #[test]
    fn test_hydrogen_displacement_magnitude() {
        let h = hydrogen_displacement(&MediumConfig::default());
        assert!(
            (h.displacement_m3 - 1.054e-52).abs() / 1.054e-52 < 1e-2,
            "ΔV_e off: {:e}",
            h.displacement_m3
        );
    }

    #[test]
    fn test_helium_prediction() {
        let he = helium_ionization();
        assert!(
            (he.predicted_ev - REAL_HE_EV).abs() / REAL_HE_EV < 0.01,
            "He prediction off: {} eV",
            he.predicted_ev
        );
        assert!((he.scale_factor - 4.0 / 2.223).abs() < 1e-12);
    }

    #[test]
    fn test_lithium_prediction() {
        let li = lithium_ionization();
        assert!(
            (li.predicted_ev - REAL_LI_EV).abs() / REAL_LI_EV < 0.01,
            "Li prediction off: {} eV",
            li.predicted_ev
        );
        assert!(li.accuracy_percent > 99.0);
    }
}
