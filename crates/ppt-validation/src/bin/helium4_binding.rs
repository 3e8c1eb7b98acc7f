// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Helium-4 Binding Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::binding::{helium4_binding, REAL_HE4_MEV};
use ppt_types::config::MediumConfig;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Helium-4 Nuclear Binding Geometric Solver ---");

    let cfg = MediumConfig::default();
    let b = helium4_binding(&cfg);

    println!("1. Raw 4-Nucleon Displacement Volume: {:.4e} m^3", b.raw_volume_m3);
    println!("2. Alpha Packing Volume Defect (dV):  {:.4e} m^3", b.defect_volume_m3);

    println!("\n--- Validation Results ---");
    println!("Experimental (Standard): {REAL_HE4_MEV:.2} MeV");
    println!("PPT 3.0 Deterministic:   {:.2} MeV", b.energy_mev);
    println!("Predictive Accuracy:     {:.2}%", b.accuracy_percent);

    println!("\nMechanical Conclusion:");
    println!("The 'mass defect' of nuclear physics is strictly a geometric Volume Defect.");
    println!("The 2.223% volume lost here establishes the Phi_ppt constant used across");
    println!("all PPT 3.0 atomic and molecular scale validations.");
}
