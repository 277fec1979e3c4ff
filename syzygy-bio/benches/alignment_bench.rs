use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use syzygy_bio::alignment::{IdentityMatrix, PairwiseAligner};

fn create_dna_sequence(length: usize) -> Vec<u8> {
    let bases = b"ATGC";
    (0..length).map(|i| bases[i % 4]).collect()
}

fn create_mutated_sequence(base: &[u8], mutation_rate: f64) -> Vec<u8> {
    base.iter()
        .map(|&b| {
            if rand::random::<f64>() < mutation_rate {
                match b {
                    b'A' => b'T',
                    b'T' => b'G',
                    b'G' => b'C',
                    b'C' => b'A',
                    _ => b,
                }
            } else {
                b
            }
        })
        .collect()
}

fn bench_global_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_alignment");

    for length in &[50, 100, 500, 1000] {
        let seq1 = create_dna_sequence(*length);
        let seq2 = create_mutated_sequence(&seq1, 0.05);

        group.throughput(Throughput::Elements(*length as u64));
        group.bench_with_input(
            BenchmarkId::new("needleman_wunsch", length),
            &(seq1, seq2),
            |b, (seq1, seq2)| {
                let aligner = PairwiseAligner::new(IdentityMatrix::new(2, -1), -1);
                b.iter(|| aligner.global(black_box(seq1), black_box(seq2)));
            },
        );
    }

    group.finish();
}

fn bench_local_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_alignment");

    for length in &[50, 100, 500, 1000] {
        let seq1 = create_dna_sequence(*length);
        let seq2 = create_mutated_sequence(&seq1[length / 4..length / 2], 0.05);

        group.throughput(Throughput::Elements(*length as u64));
        group.bench_with_input(
            BenchmarkId::new("smith_waterman", length),
            &(seq1, seq2),
            |b, (seq1, seq2)| {
                let aligner = PairwiseAligner::new(IdentityMatrix::new(2, -1), -1);
                b.iter(|| aligner.local(black_box(seq1), black_box(seq2)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_global_alignment, bench_local_alignment);
criterion_main!(benches);
