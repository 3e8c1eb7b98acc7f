// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Acoustic Half-Life Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::half_life::{half_life_table, integrity_curve};
use ppt_types::config::MediumConfig;
use ppt_types::error::PptResult;
use ppt_viz::fatigue_chart::render_fatigue;

/// Fatigue curve sampling. Python: np.linspace(0, 30, 500).
const CURVE_YEARS: f64 = 30.0;
const CURVE_POINTS: usize = 500;

fn main() -> PptResult<()> {
    println!("--- PPT - Atoms: PPT 3.0: Deterministic Half-Life (Acoustic Fatigue) Solver ---");

    let cfg = MediumConfig::default();
    println!("1. Medium Wave Speed: {} m/s", cfg.wave_speed);
    println!(
        "2. Baseline Hydrostatic Impact Frequency: {:.3e} Hz\n",
        cfg.impact_frequency()
    );

    let rows = half_life_table(&cfg);

    println!(
        "{:<16} | {:<17} | {:<15} | {:<15} | {:<10}",
        "Isotope", "Structural Lock", "PPT Pred (yr)", "NIST Real (yr)", "Accuracy"
    );
    println!("{}", "-".repeat(85));
    for row in &rows {
        println!(
            "{:<16} | {:<17.4} | {:<15.2} | {:<15.2} | {:>8.2}%",
            row.isotope.name,
            row.isotope.lock_factor,
            row.predicted_yr,
            row.isotope.real_half_life_yr,
            row.accuracy_percent
        );
    }

    println!("\nMechanical Conclusion:");
    println!("Radioactive decay is not 'random'. It is the exact mathematical point of");
    println!("structural fracture caused by the continuous acoustic fatigue of the superfluid medium.");

    // Theoretical fatigue curve for Tritium.
    let tritium_half_life = rows[0].predicted_yr;
    let t_years: Vec<f64> = (0..CURVE_POINTS)
        .map(|i| CURVE_YEARS * i as f64 / (CURVE_POINTS - 1) as f64)
        .collect();
    let integrity = integrity_curve(tritium_half_life, &t_years);

    let out = "acoustic_fatigue_tritium.png";
    render_fatigue(out, tritium_half_life, &t_years, &integrity)?;
    println!("\nFatigue curve saved as: {out}");

    Ok(())
}
