// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Island of Stability Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::stability::{flerovium_scan, MAGIC_N, Z_FLEROVIUM};

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Hydrostatic Island of Stability Solver ---");
    println!("Target: Element 114 (Flerovium)\n");

    let scan = flerovium_scan();

    println!("Testing Hydrostatic Lattice Tension (Lower is more stable):");
    println!("{}", "-".repeat(65));
    for row in &scan.window {
        println!(
            "Isotope Flerovium-{} (N={}): Padding Neutrons = {} | Tension = {:.4}",
            Z_FLEROVIUM + row.neutrons,
            row.neutrons,
            row.padding_neutrons,
            row.tension
        );
    }
    println!("{}", "-".repeat(65));

    println!(
        "PPT 3.0 Golden Packing Prediction: Flerovium-{} (N={})",
        Z_FLEROVIUM + scan.best_n,
        scan.best_n
    );
    println!("Standard Physics 'Magic Number':   Flerovium-298 (N=184)");

    if scan.best_n == MAGIC_N {
        println!("\nISLAND OF STABILITY REACHED:");
        println!("Standard Model 'Magic Numbers' are just macroscopic manifestations");
        println!("of Golden Ratio (Phi) geometric node packing.");
    }
}
