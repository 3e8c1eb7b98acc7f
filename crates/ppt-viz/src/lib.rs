// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Visualization
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static chart rendering for the validation binaries.
//!
//! Charts are peripheral to the arithmetic core; they reproduce the
//! high-visibility gold/cyan styling of the Python suite as fixed-name
//! PNG files in the working directory.

pub mod fatigue_chart;
pub mod style;
pub mod topology;
pub mod trend_chart;

use ppt_types::error::PptError;

/// Map a plotters drawing error into the suite error type.
pub(crate) fn chart_err(e: impl std::fmt::Display) -> PptError {
    PptError::Chart(e.to_string())
}
