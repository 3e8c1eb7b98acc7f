// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Chart Style
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! High-visibility palette shared by all charts.

use plotters::style::RGBColor;

/// Observed reality (NIST) series. Python: '#FFD700'.
pub const GOLD: RGBColor = RGBColor(255, 215, 0);

/// PPT prediction series. Python: '#00FFFF'.
pub const CYAN: RGBColor = RGBColor(0, 255, 255);

/// Raw pressure gradient baseline.
pub const GREY: RGBColor = RGBColor(128, 128, 128);

/// Standard-model isotropic emission. Python: '#457b9d'.
pub const STEEL_BLUE: RGBColor = RGBColor(69, 123, 157);

/// PPT cleavage emission. Python: '#e63946'.
pub const SIGNAL_RED: RGBColor = RGBColor(230, 57, 70);

/// Dark figure background. Python: '#0a0a0a'.
pub const NEAR_BLACK: RGBColor = RGBColor(10, 10, 10);
