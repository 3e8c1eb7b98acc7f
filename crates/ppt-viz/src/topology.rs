// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Emission Topology Chart
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dual-panel 3D scatter of the two emission models: isotropic
//! quantum probability (left, steel blue) vs geometric cleavage
//! (right, signal red) on hidden axes over a dark background.

use plotters::prelude::*;
use ppt_types::error::PptResult;

use crate::chart_err;
use crate::style::{NEAR_BLACK, SIGNAL_RED, STEEL_BLUE};

/// Fixed output name, matching the Python suite.
pub const TOPOLOGY_PNG: &str = "decay_topology_falsification.png";

fn draw_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    points: &[[f64; 3]],
    color: RGBColor,
) -> PptResult<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_3d(-1.2..1.2, -1.2..1.2, -1.2..1.2)
        .map_err(chart_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.25;
        pb.yaw = 0.65;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p[0], p[1], p[2]), 2, color.mix(0.6).filled())),
        )
        .map_err(chart_err)?;

    Ok(())
}

/// Render both emission models side by side and write the PNG to the
/// working directory.
pub fn render_topology(
    path: &str,
    isotropic: &[[f64; 3]],
    cleavage: &[[f64; 3]],
) -> PptResult<()> {
    let root = BitMapBackend::new(path, (1400, 700)).into_drawing_area();
    root.fill(&NEAR_BLACK).map_err(chart_err)?;

    let (left, right) = root.split_horizontally(700);
    draw_panel(&left, isotropic, STEEL_BLUE)?;
    draw_panel(&right, cleavage, SIGNAL_RED)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
