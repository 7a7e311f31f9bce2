use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::OsRng, seq::SliceRandom};

use dnatoolkit::{extract_proteins, generate_reading_frames, DnaSequence, Nucleotide};

fn random_dna(len: usize) -> DnaSequence {
    (0..len)
        .map(|_| *Nucleotide::ALL.choose(&mut OsRng).unwrap())
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("proteins");
    for len in [1_000usize, 10_000, 100_000] {
        let dna = random_dna(len);
        let desc = format!("{len} nt");
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("reading-frames", &desc), &dna, |b, dna| {
            b.iter(|| black_box(generate_reading_frames(dna)))
        });
        group.bench_with_input(BenchmarkId::new("unordered", &desc), &dna, |b, dna| {
            b.iter(|| black_box(extract_proteins(dna, false)))
        });
        group.bench_with_input(BenchmarkId::new("ordered", &desc), &dna, |b, dna| {
            b.iter(|| black_box(extract_proteins(dna, true)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
