// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Carbon-12 Alpha-Cluster Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_solvers::binding::{carbon12_binding, REAL_C12_MEV};
use ppt_types::config::MediumConfig;

fn main() {
    println!("--- PPT - Atoms: PPT 3.0: Carbon-12 Geometric Alpha-Cluster Solver ---");

    let cfg = MediumConfig::default();
    let b = carbon12_binding(&cfg);

    println!("1. Total Raw 12-Nucleon Volume: {:.4e} m^3", b.raw_volume_m3);
    println!("2. Total Volumetric Defect:     {:.4e} m^3\n", b.defect_volume_m3);

    println!("Energy from 3 He-4 Tetrahedrons: {:.2} MeV", b.cluster_energy_mev);
    println!("Energy from Triangular Interface:{:.2} MeV", b.interface_energy_mev);
    println!("-------------------------------------------------");

    println!("PPT Total Calculated Energy:     {:.2} MeV", b.total_energy_mev);
    println!("Experimental C-12 Reality:       {REAL_C12_MEV:.2} MeV");
    println!("Predictive Accuracy:             {:.2}%", b.accuracy_percent);

    if b.fractal_scaling_ok {
        println!("\nFRACTAL SCALING SUCCESSFUL: Complex triangular geometries perfectly predict binding energy.");
    }
}
