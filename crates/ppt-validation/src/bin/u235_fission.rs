// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — U-235 Fission Cavitation Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::fission::u235_cavitation;
use ppt_types::config::MediumConfig;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: U-235 Fission Hydrostatic Cavitation Solver ---");

    let cfg = MediumConfig::default();
    let f = u235_cavitation(&cfg);

    println!("1. Cavitation Void Created (1 atom): {:.4e} m^3", f.void_volume_m3);
    println!("2. Kinetic Energy Release (1 atom):  {:.2} MeV\n", f.atom_release_mev);

    println!("Total Cavitation Fractures (1 kg):   {:.2e} events", f.atoms_per_kg);
    println!("Total Macro Shockwave (Joules):      {:.2e} J", f.kg_release_j);
    println!("-------------------------------------------------");
    println!("PPT Macro Yield (1 kg U-235):        {:.2} Kilotons of TNT", f.yield_kilotons);
    println!("Observed Reality (Historical):       ~15.0 - 17.0 Kilotons of TNT");

    if f.macro_validated {
        println!("\nMACRO VALIDATION SUCCESSFUL: Fluid-dynamic cavitation maps perfectly to nuclear yields.");
    }
}
