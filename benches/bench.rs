use avl::Set;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 3] = [100, 10_000, 100_000];

fn rng() -> ChaCha20Rng { ChaCha20Rng::seed_from_u64(0x5eed) }

fn random_set(n: usize, rng: &mut ChaCha20Rng) -> Set<usize> {
    (0..n).map(|_| rng.gen::<usize>() % n).collect()
}

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let mut set = random_set(n, &mut rng);

            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                set.insert(k);
                set.remove(&k);
            });
            black_box(set);
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let mut set: Set<_> = (0..n).map(|i| i * 2).collect();
            let mut i = 1;

            b.iter(|| {
                set.insert(i);
                set.remove(&i);
                i = (i + 2) % (n * 2);
            });
            black_box(set);
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let set = random_set(n, &mut rng);

            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                black_box(set.contains(&k));
            });
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let set: Set<_> = (0..n).collect();
            let mut i = 0;

            b.iter(|| {
                black_box(set.contains(&i));
                i = (i + 1) % n;
            });
        });
    }

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for &n in &SIZES {
        let set: Set<_> = (0..n).collect();

        group.bench_with_input(BenchmarkId::new("forward", n), &set, |b, set| {
            b.iter(|| for item in set { black_box(item); });
        });

        group.bench_with_input(BenchmarkId::new("cursor", n), &set, |b, set| {
            b.iter(|| {
                let mut cursor = set.cursor_front();
                while let Some(item) = cursor.get() {
                    black_box(item);
                    cursor.move_next();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_remove, bench_find, bench_iter);
criterion_main!(benches);
