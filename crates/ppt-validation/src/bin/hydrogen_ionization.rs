// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Hydrogen Ionization Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::ionization::hydrogen_displacement;
use ppt_types::config::MediumConfig;
use ppt_types::constants::E_GROUND_HYDROGEN_EV;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Hydrostatic Ionization Solver ---");

    let cfg = MediumConfig::default();
    let h = hydrogen_displacement(&cfg);

    println!("1. Universal Pinning Pressure: {:.3e} J/m^3", h.pressure);
    println!(
        "2. Target Ground State Tension: {:.3e} Joules ({E_GROUND_HYDROGEN_EV} eV)",
        h.target_j
    );
    println!(
        "3. Calculated Electron Displacement Volume (Delta V_e): {:.3e} m^3",
        h.displacement_m3
    );

    println!("\n--- Verification ---");
    println!("Input Shear Energy:  {E_GROUND_HYDROGEN_EV:.3} eV");
    println!("Derived Shear Energy:{:.3} eV", h.derived_ev);
    println!("Match Accuracy:      {:.2}%", h.accuracy_percent);
}
