// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Fatigue Chart
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Structural integrity curve with the deterministic fracture point
//! marked at the half-life.

use plotters::prelude::*;
use ppt_types::error::PptResult;

use crate::chart_err;
use crate::style::{CYAN, GOLD, GREY};

/// Render the integrity degradation curve (cyan), the fracture point
/// vertical (gold) and the 50% integrity horizontal (grey).
pub fn render_fatigue(
    path: &str,
    half_life_yr: f64,
    t_years: &[f64],
    integrity: &[f64],
) -> PptResult<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let t_max = t_years.last().copied().unwrap_or(1.0);

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .build_cartesian_2d(0.0..t_max, 0.0..105.0)
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            t_years.iter().cloned().zip(integrity.iter().cloned()),
            CYAN.stroke_width(3),
        ))
        .map_err(chart_err)?;

    // Deterministic fracture point.
    chart
        .draw_series(LineSeries::new(
            [(half_life_yr, 0.0), (half_life_yr, 100.0)],
            GOLD.stroke_width(2),
        ))
        .map_err(chart_err)?;

    // 50% integrity reference.
    chart
        .draw_series(LineSeries::new(
            [(0.0, 50.0), (t_max, 50.0)],
            GREY.stroke_width(1),
        ))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
