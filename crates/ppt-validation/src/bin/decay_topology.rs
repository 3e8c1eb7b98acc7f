// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Decay Topology Falsification
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ppt_montecarlo::emission::{
    sample_cleavage, sample_isotropic, CLEAVAGE_NOISE_SIGMA, N_EVENTS,
};
use ppt_types::error::PptResult;
use ppt_viz::topology::{render_topology, TOPOLOGY_PNG};

fn main() -> PptResult<()> {
    let mut rng = rand::thread_rng();

    // Model A: standard physics, isotropic quantum probability.
    let isotropic = sample_isotropic(&mut rng, N_EVENTS);

    // Model B: PPT-Atoms, anisotropic geometric cleavage.
    let cleavage = sample_cleavage(&mut rng, N_EVENTS, CLEAVAGE_NOISE_SIGMA);

    render_topology(TOPOLOGY_PNG, &isotropic, &cleavage)?;
    println!("Simulation complete. Image saved as: {TOPOLOGY_PNG}");

    Ok(())
}
