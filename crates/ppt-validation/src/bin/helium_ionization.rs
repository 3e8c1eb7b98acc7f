// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Helium Ionization Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::ionization::{helium_ionization, REAL_HE_EV};
use ppt_types::constants::PHI_PPT;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Helium Ionization Alpha Lock Solver ---");

    let he = helium_ionization();

    println!("1. Unshielded Core Multiplier: 4");
    println!("2. Alpha Packing Attenuation (Phi_ppt): {PHI_PPT}");
    println!("3. Derived Geometric Scale Factor: {:.4}", he.scale_factor);

    println!("\n--- Validation Results ---");
    println!("Experimental (NIST): {REAL_HE_EV:.3} eV");
    println!("PPT 3.0 Deterministic: {:.3} eV", he.predicted_ev);
    println!("Predictive Accuracy:   {:.2}%", he.accuracy_percent);

    println!("\nMechanical Conclusion:");
    println!("Helium's ionization energy is defined by its core displacement square,");
    println!("attenuated perfectly by the tetrahedral Alpha Packing Constant (Phi_ppt).");
}
