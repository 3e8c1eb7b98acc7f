// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Period 3 Packing Trend Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::periodic::{period3_trend, PERIOD3, PERIOD3_BASELINE};
use ppt_types::error::PptResult;
use ppt_viz::trend_chart::render_overlay;

const CHART_PNG: &str = "period3_harmonic_packing.png";

fn main() -> PptResult<()> {
    println!("--- PPT - Atoms: PPT 3.0: Period 3 Harmonic Packing Solver ---");
    println!(
        "Baseline: {} eV anchor + {} eV per core unit\n",
        PERIOD3_BASELINE.0, PERIOD3_BASELINE.1
    );

    let t = period3_trend();

    println!(
        "{:<4} | {:<22} | {:<14} | {:<11} | Diff",
        "El.", "Geometry", "Predicted (eV)", "NIST (eV)"
    );
    println!("{}", "-".repeat(68));
    for (e, r) in PERIOD3.iter().zip(t.records.iter()) {
        println!(
            "{:<4} | {:<22} | {:<14.3} | {:<11.3} | {:+.3}",
            e.symbol,
            e.geometry,
            r.predicted,
            r.observed,
            r.diff()
        );
    }
    println!("{}", "-".repeat(68));

    println!("Trend Correlation (Pearson): {:.5}", t.summary.correlation);
    println!("Mean Absolute Error:         {:.4} eV", t.summary.mean_abs_error);

    let x: Vec<f64> = PERIOD3.iter().map(|e| e.outer_nodes as f64).collect();
    let observed: Vec<f64> = t.records.iter().map(|r| r.observed).collect();
    let predicted: Vec<f64> = t.records.iter().map(|r| r.predicted).collect();
    let baseline = t.baseline_ev.to_vec();
    render_overlay(CHART_PNG, &x, &observed, &predicted, Some(&baseline))?;
    println!("\nTrend chart saved as: {CHART_PNG}");

    println!("\nMechanical Conclusion:");
    println!("A softer 1.60 eV pressure gradient with the same geometric tensors");
    println!("reproduces the Na-Ar trend, confirming the packing mechanism scales.");

    Ok(())
}
