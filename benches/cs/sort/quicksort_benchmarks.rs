use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use randsort::sort::randomized_quicksort_with_rng;

fn bench_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_quicksort");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    for size in [100, 1_000, 10_000, 100_000] {
        let random: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        let sorted: Vec<i64> = (0..size as i64).collect();
        let few_keys: Vec<i64> = (0..size).map(|_| rng.gen_range(0..4)).collect();

        for (name, input) in [("random", &random), ("sorted", &sorted), ("few_keys", &few_keys)] {
            group.bench_with_input(BenchmarkId::new(name, size), input, |b, input| {
                let mut shuffle_rng = ChaCha8Rng::seed_from_u64(1);
                b.iter_batched_ref(
                    || input.clone(),
                    |v| randomized_quicksort_with_rng(black_box(v), &mut shuffle_rng, i64::cmp),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);
