// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants;

/// Universal medium configuration.
/// Maps 1:1 to medium_config.json at the repository root. The defaults
/// reproduce the PPT 3.0 exact constants, so solvers built from
/// `MediumConfig::default()` match the published validation numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediumConfig {
    pub medium_name: String,
    /// Universal medium density (kg/m³).
    pub medium_density: f64,
    /// Maximum wave speed of the medium (m/s).
    pub wave_speed: f64,
    /// Spherical nucleon radius (m).
    pub nucleon_radius_m: f64,
    /// Nuclear saturation boundary r_0 (m).
    pub saturation_radius_m: f64,
    /// Tetrahedral alpha packing overlap fraction (dimensionless).
    pub alpha_overlap_fraction: f64,
}

impl Default for MediumConfig {
    fn default() -> Self {
        MediumConfig {
            medium_name: "PPT-3.0-Universal-Medium".to_string(),
            medium_density: constants::RHO_MEDIUM,
            wave_speed: constants::C_MEDIUM,
            nucleon_radius_m: constants::R_NUCLEON,
            saturation_radius_m: constants::R_SATURATION,
            alpha_overlap_fraction: constants::PHI_ALPHA_OVERLAP,
        }
    }
}

impl MediumConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> crate::error::PptResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Medium pinning pressure (Pa or J/m³): rho * c².
    pub fn pressure(&self) -> f64 {
        self.medium_density * self.wave_speed * self.wave_speed
    }

    /// Baseline hydrostatic impact frequency c / r_0 (Hz). ~2.398e23.
    pub fn impact_frequency(&self) -> f64 {
        self.wave_speed / self.saturation_radius_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/ppt-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn config_path() -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("medium_config.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_medium_config() {
        let cfg = MediumConfig::from_file(&config_path()).unwrap();
        assert_eq!(cfg.medium_name, "PPT-3.0-Universal-Medium");
        assert!((cfg.medium_density - 2.3e17).abs() < 1e10);
        assert!((cfg.wave_speed - 299_792_458.0).abs() < 1e-6);
        assert!((cfg.alpha_overlap_fraction - 0.02223).abs() < 1e-12);
    }

    #[test]
    fn test_default_matches_published_constants() {
        let cfg = MediumConfig::default();
        assert!((cfg.pressure() - constants::medium_pressure()).abs() < 1e18);
        assert!((cfg.nucleon_radius_m - 0.8427e-15).abs() < 1e-30);
    }

    #[test]
    fn test_impact_frequency() {
        let cfg = MediumConfig::default();
        let f = cfg.impact_frequency();
        assert!(
            (f - 2.398e23).abs() / 2.398e23 < 1e-3,
            "Impact frequency off: {f:e}"
        );
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = MediumConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: MediumConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.medium_name, cfg2.medium_name);
        assert!((cfg.medium_density - cfg2.medium_density).abs() < 1.0);
    }
}
