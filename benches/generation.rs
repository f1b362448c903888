//! Criterion benchmark for puzzle generation at the supported grid sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sopa::generation::utils;
use sopa::{GenerationConfig, PuzzleGenerator, WordEntry};

fn word_list() -> Vec<WordEntry> {
    [
        "gato", "perro", "jirafa", "sol", "luna", "montaña", "bosque", "estrella", "nube",
        "viento",
    ]
    .iter()
    .map(|word| WordEntry::new(*word, format!("pista de {}", word)))
    .collect()
}

fn bench_generation(c: &mut Criterion) {
    let entries = word_list();
    let generator = PuzzleGenerator::new();

    for &size in sopa::config::SUPPORTED_GRID_SIZES.iter() {
        c.bench_function(&format!("generate_{}x{}", size, size), |b| {
            let config = GenerationConfig::with_size(42, size);
            b.iter(|| {
                let mut rng = utils::create_rng(&config);
                generator
                    .generate(black_box(&entries), &config, &mut rng)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
