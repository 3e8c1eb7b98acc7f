// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Spectral Transitions Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_math::stats::accuracy_percent;
use ppt_solvers::spectral::series_energies_ev;
use ppt_types::constants::E_GROUND_HYDROGEN_EV;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Harmonic Spectral Transition Solver ---");
    println!("Ground State Boundary Tension: {E_GROUND_HYDROGEN_EV} eV\n");

    println!(
        "{:<14} | {:<10} | {:<14} | {:<12} | Accuracy",
        "Transition", "Jump", "Predicted (eV)", "NIST (eV)"
    );
    println!("{}", "-".repeat(70));

    for (t, e) in series_energies_ev() {
        println!(
            "{:<14} | n={} -> n={} | {:<14.5} | {:<12.2} | {:.2}%",
            t.name,
            t.n_high,
            t.n_low,
            e,
            t.experimental_ev,
            accuracy_percent(e, t.experimental_ev)
        );
    }
    println!("{}", "-".repeat(70));

    println!("\nMechanical Conclusion:");
    println!("Photon emission is the tension released when a boundary node slips");
    println!("between harmonic pressure shells. No quantum jump postulate required.");
}
