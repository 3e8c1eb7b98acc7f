// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Water Bond Angle Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::bond_angle::{water_bond_angle, REAL_H2O_DEG, THETA_TETRAHEDRAL};

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Water Bond Angle Hydrostatic Solver ---");

    let w = water_bond_angle();

    println!("1. Ideal Tetrahedral Node Angle: {THETA_TETRAHEDRAL} deg");
    println!(
        "2. Outer Displacement Nodes per Axis: [1, 1, 2, 2] (total {})",
        w.total_nodes
    );
    println!("3. Double-Layer Excess Nodes: {}", w.excess_nodes);
    println!(
        "4. Hydrostatic Angular Compression: {:.4} deg",
        w.compression_deg
    );

    println!("\n--- Validation Results ---");
    println!("Experimental (NIST): {REAL_H2O_DEG} deg");
    println!("PPT 3.0 Deterministic: {:.4} deg", w.predicted_deg);
    println!("Predictive Accuracy:   {:.2}%", w.accuracy_percent);

    println!("\nMechanical Conclusion:");
    println!("The H-O-H angle is the ideal tetrahedral lock crushed by the");
    println!("pressure surplus of oxygen's doubled displacement axes.");
}
