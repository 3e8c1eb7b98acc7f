// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Molecular Bond Angle Trend Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::bond_angle::molecular_trend;
use ppt_types::error::PptResult;
use ppt_viz::trend_chart::render_overlay;

const CHART_PNG: &str = "molecular_bond_angle_trend.png";

fn main() -> PptResult<()> {
    println!("--- PPT - Atoms: PPT 3.0: Molecular Bond Angle Trend Solver ---");
    println!("Series: CH4 -> NH3 -> H2O (rising core displacement asymmetry)\n");

    let (records, summary) = molecular_trend();

    println!(
        "{:<16} | {:<15} | {:<12} | Diff",
        "Molecule", "Predicted (deg)", "Real (deg)"
    );
    println!("{}", "-".repeat(58));
    for r in &records {
        println!(
            "{:<16} | {:<15.4} | {:<12.1} | {:+.4}",
            r.label,
            r.predicted,
            r.observed,
            r.diff()
        );
    }
    println!("{}", "-".repeat(58));

    println!("Trend Correlation (Pearson): {:.5}", summary.correlation);
    println!("Mean Absolute Error:         {:.4} deg", summary.mean_abs_error);

    let x: Vec<f64> = (1..=records.len()).map(|i| i as f64).collect();
    let observed: Vec<f64> = records.iter().map(|r| r.observed).collect();
    let predicted: Vec<f64> = records.iter().map(|r| r.predicted).collect();
    render_overlay(CHART_PNG, &x, &observed, &predicted, None)?;
    println!("\nTrend chart saved as: {CHART_PNG}");

    println!("\nMechanical Conclusion:");
    println!("One transfer coefficient maps core/boundary displacement ratio to");
    println!("angular compression across the whole CH4/NH3/H2O series.");

    Ok(())
}
