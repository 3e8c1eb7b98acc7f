// ─────────────────────────────────────────────────────────────────────
// SCPN PPT Atoms — Emission Sampling Bench
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ppt_montecarlo::emission::{sample_cleavage, sample_isotropic, N_EVENTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_isotropic(c: &mut Criterion) {
    c.bench_function("isotropic_5000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| sample_isotropic(&mut rng, black_box(N_EVENTS)))
    });
}

fn bench_cleavage(c: &mut Criterion) {
    c.bench_function("cleavage_5000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| sample_cleavage(&mut rng, black_box(N_EVENTS), 0.15))
    });
}

criterion_group!(benches, bench_isotropic, bench_cleavage);
criterion_main!(benches);
