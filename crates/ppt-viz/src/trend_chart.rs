// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Trend Chart
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Observed-vs-predicted overlay chart (gold vs cyan), with an
//! optional grey baseline series. Used by the periodic packing, bond
//! angle and bow shock binaries.

use plotters::prelude::*;
use ppt_types::error::PptResult;

use crate::chart_err;
use crate::style::{CYAN, GOLD, GREY};

/// Render an overlay of observed (gold) and predicted (cyan) series
/// over a shared x grid, plus an optional baseline (grey).
pub fn render_overlay(
    path: &str,
    x: &[f64],
    observed: &[f64],
    predicted: &[f64],
    baseline: Option<&[f64]>,
) -> PptResult<()> {
    let root = BitMapBackend::new(path, (1100, 650)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let x_min = x.first().copied().unwrap_or(0.0);
    let x_max = x.last().copied().unwrap_or(1.0);

    let all = observed
        .iter()
        .chain(predicted.iter())
        .chain(baseline.into_iter().flatten());
    let y_min = all.clone().cloned().fold(f64::INFINITY, f64::min);
    let y_max = all.cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = 0.08 * (y_max - y_min).max(1e-9);

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(chart_err)?;

    if let Some(base) = baseline {
        chart
            .draw_series(LineSeries::new(
                x.iter().cloned().zip(base.iter().cloned()),
                GREY.stroke_width(1),
            ))
            .map_err(chart_err)?;
    }

    chart
        .draw_series(LineSeries::new(
            x.iter().cloned().zip(observed.iter().cloned()),
            GOLD.stroke_width(3),
        ))
        .map_err(chart_err)?;
    chart
        .draw_series(
            x.iter()
                .zip(observed.iter())
                .map(|(&xi, &yi)| Circle::new((xi, yi), 5, GOLD.filled())),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            x.iter().cloned().zip(predicted.iter().cloned()),
            CYAN.stroke_width(2),
        ))
        .map_err(chart_err)?;
    chart
        .draw_series(
            x.iter()
                .zip(predicted.iter())
                .map(|(&xi, &yi)| TriangleMarker::new((xi, yi), 6, CYAN.filled())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
