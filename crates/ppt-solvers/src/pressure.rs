// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Pressure-Volume Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The recurring PPT 3.0 energy idiom: E = (rho·c²) · ΔV.
//!
//! Binding energy is a geometric volume defect crushed out by the
//! hydrostatic pinning pressure of the universal medium. The inverse
//! direction (ΔV = E / pressure) recovers the displacement footprint
//! of a known tension.

use ppt_types::config::MediumConfig;

/// Energy (J) released when the medium crushes out a volume defect
/// ΔV (m³) under pressure (J/m³).
pub fn defect_energy_joules(pressure: f64, delta_v: f64) -> f64 {
    pressure * delta_v
}

/// Displacement volume (m³) that stores a given energy (J) under the
/// medium pressure. Inverse of `defect_energy_joules`.
pub fn defect_volume_m3(pressure: f64, energy_j: f64) -> f64 {
    energy_j / pressure
}

/// Full evaluator over a configured medium: raw volume × defect
/// fraction → ΔV → scaled energy.
#[derive(Debug, Clone, Copy)]
pub struct DefectEvaluation {
    /// Raw uncompressed volume (m³).
    pub raw_volume_m3: f64,
    /// Crushed-out displacement volume (m³).
    pub defect_volume_m3: f64,
    /// Released energy (J).
    pub energy_j: f64,
    /// Released energy after unit conversion.
    pub energy_scaled: f64,
}

/// Evaluate E = pressure · (V_raw · fraction), scaling the result by
/// `unit_conversion` (J per output unit, e.g. J/MeV).
pub fn evaluate_defect(
    cfg: &MediumConfig,
    raw_volume_m3: f64,
    defect_fraction: f64,
    unit_conversion: f64,
) -> DefectEvaluation {
    let defect = raw_volume_m3 * defect_fraction;
    let energy_j = defect_energy_joules(cfg.pressure(), defect);
    DefectEvaluation {
        raw_volume_m3,
        defect_volume_m3: defect,
        energy_j,
        energy_scaled: energy_j / unit_conversion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppt_types::constants::JOULES_PER_MEV;

    #[test]
    fn test_energy_volume_inverse() {
        let p = MediumConfig::default().pressure();
        let e = 4.6e-12;
        let dv = defect_volume_m3(p, e);
        let back = defect_energy_joules(p, dv);
        assert!((back - e).abs() / e < 1e-14);
    }

    #[test]
    fn test_evaluate_defect_scaling() {
        let cfg = MediumConfig::default();
        let eval = evaluate_defect(&cfg, 1.0e-44, 0.02223, JOULES_PER_MEV);
        assert!((eval.defect_volume_m3 - 2.223e-46).abs() < 1e-50);
        assert!(eval.energy_scaled > 0.0);
        assert!(
            (eval.energy_j / eval.energy_scaled - JOULES_PER_MEV).abs() < 1e-25,
            "Scaling must be a pure unit conversion"
        );
    }
}
