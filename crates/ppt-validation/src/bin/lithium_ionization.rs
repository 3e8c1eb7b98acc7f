// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Lithium Ionization Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::ionization::{lithium_ionization, REAL_LI_EV};
use ppt_types::constants::E_GROUND_HYDROGEN_EV;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Lithium Ionization Geometric Solver ---");

    let li = lithium_ionization();

    println!(
        "1. Unshielded n=2 Boundary Tension: {:.4} eV",
        E_GROUND_HYDROGEN_EV / 4.0
    );
    println!("2. Inner Double Layer Nodes: 2");
    println!("3. Volumetric Permeability Factor: {:.4}", 2.0f64.cbrt());

    println!("\n--- Validation Results ---");
    println!("Experimental (NIST): {REAL_LI_EV:.4} eV");
    println!("PPT 3.0 Deterministic: {:.4} eV", li.predicted_ev);
    println!("Predictive Accuracy:   {:.2}%", li.accuracy_percent);

    println!("\nMechanical Conclusion:");
    println!("Lithium's ionization energy is determined by the 1/n² hydrostatic pressure drop,");
    println!("multiplied by the volumetric permeability of its 2-node inner double layer.");
}
