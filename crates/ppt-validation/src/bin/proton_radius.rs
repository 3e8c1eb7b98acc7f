// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Proton Radius Puzzle Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::proton_radius::{solve_proton_radius, REAL_MUON_RADIUS_FM};

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Proton Radius Hydrostatic Solver ---");

    let p = solve_proton_radius();

    println!(
        "1. Electron Displacement Compression: {:.4}%",
        p.electron_compression * 100.0
    );
    println!(
        "2. Muon Displacement Compression:     {:.4}%",
        p.muon_compression * 100.0
    );
    println!(
        "3. Zero-State Proton Radius (Uncompressed): {:.4} fm",
        p.zero_state_radius_fm
    );

    println!("\n--- Validation Results ---");
    println!("Muonic Hydrogen Measurement: {REAL_MUON_RADIUS_FM:.4} fm");
    println!("PPT 3.0 Muonic Prediction:   {:.4} fm", p.muonic_radius_fm);
    println!("Predictive Accuracy:         {:.2}%", p.accuracy_percent);

    if p.puzzle_solved {
        println!("\nPUZZLE SOLVED:");
        println!("There is no measurement anomaly. The muon's 200x displacement mass");
        println!("physically squeezes the proton resonance bubble. Both experiments");
        println!("measured the same object under different hydrostatic loads.");
    }
}
