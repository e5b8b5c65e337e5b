use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use randsort::sort::{randomized_quickselect_with_rng, randomized_quicksort_with_rng};

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    for size in [1_000, 10_000, 100_000] {
        let input: Vec<f64> = (0..size).map(|_| rng.gen()).collect();
        let mut shuffle_rng = ChaCha8Rng::seed_from_u64(1);

        group.bench_with_input(BenchmarkId::new("quickselect", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |v| {
                    let k = v.len() / 2;
                    *randomized_quickselect_with_rng(black_box(v), k, &mut shuffle_rng, f64::total_cmp)
                        .unwrap()
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("quicksort", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |v| {
                    randomized_quicksort_with_rng(black_box(v), &mut shuffle_rng, f64::total_cmp);
                    v[v.len() / 2]
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median);
criterion_main!(benches);
