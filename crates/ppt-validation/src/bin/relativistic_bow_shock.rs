// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Relativistic Bow Shock Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::relativistic::{bow_shock_curve, comparison_table};
use ppt_types::error::PptResult;
use ppt_viz::trend_chart::render_overlay;

const CHART_PNG: &str = "relativistic_bow_shock.png";

fn main() -> PptResult<()> {
    println!("--- PPT - Atoms: PPT 3.0: Relativistic Bow Shock Solver ---");
    println!("Identity test: Lorentz factor vs Prandtl-Glauert compressibility\n");

    println!(
        "{:<8} | {:<12} | {:<16} | Difference",
        "v/c", "Lorentz γ", "Prandtl-Glauert"
    );
    println!("{}", "-".repeat(55));
    for row in comparison_table() {
        println!(
            "{:<8.2} | {:<12.5} | {:<16.5} | {:.2e}",
            row.mach, row.lorentz, row.prandtl_glauert, row.difference
        );
    }
    println!("{}", "-".repeat(55));

    let curve = bow_shock_curve();
    render_overlay(
        CHART_PNG,
        &curve.mach,
        &curve.lorentz,
        &curve.prandtl_glauert,
        None,
    )?;
    println!("\nCurve overlay saved as: {CHART_PNG}");

    println!("\nMechanical Conclusion:");
    println!("'Relativistic mass increase' is the bow-shock compression of the");
    println!("universal medium. Einstein's gamma is aerodynamics at the wave-speed limit.");

    Ok(())
}
