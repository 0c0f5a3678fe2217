use std::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Distribution;
use rand_distr::Zipf;

const SIZES: &[usize] = &[(1 << 10), (1 << 13), (1 << 16)];

fn shuffled_keys(size: usize) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..size as u32).collect();
    let mut rng = SmallRng::seed_from_u64(0x5eed_cafe);
    keys.shuffle(&mut rng);
    keys
}

fn string_keys(size: usize) -> Vec<Box<[u8]>> {
    shuffled_keys(size)
        .into_iter()
        .map(|key| Box::from(format!("key_{key:016X}").as_bytes()))
        .collect()
}

fn bench_int_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("probe-hash", size), &keys, |b, keys| {
            b.iter_batched(
                probe_hash::IntTable::<u32>::new,
                |mut table| {
                    for &key in keys {
                        table.insert(key, key);
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter_batched(
                std::collections::HashMap::<u32, u32>::new,
                |mut map| {
                    for &key in keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("hashbrown", size), &keys, |b, keys| {
            b.iter_batched(
                hashbrown::HashMap::<u32, u32>::new,
                |mut map| {
                    for &key in keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_int_get_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_get_zipf");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let mut rng = SmallRng::seed_from_u64(0xfeed_beef);
        let distr = Zipf::new(size as f32 - 1.0, 1.0).unwrap();
        let lookups: Vec<u32> = (0..size).map(|_| distr.sample(&mut rng) as u32).collect();

        let mut table = probe_hash::IntTable::<u32>::new();
        let mut std_map = std::collections::HashMap::<u32, u32>::new();
        let mut brown = hashbrown::HashMap::<u32, u32>::new();
        for key in 0..size as u32 {
            table.insert(key, key);
            std_map.insert(key, key);
            brown.insert(key, key);
        }

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("probe-hash", size), &lookups, |b, lookups| {
            b.iter(|| {
                let mut hits = 0u64;
                for key in lookups {
                    if table.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
        group.bench_with_input(BenchmarkId::new("std", size), &lookups, |b, lookups| {
            b.iter(|| {
                let mut hits = 0u64;
                for key in lookups {
                    if std_map.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
        group.bench_with_input(BenchmarkId::new("hashbrown", size), &lookups, |b, lookups| {
            b.iter(|| {
                let mut hits = 0u64;
                for key in lookups {
                    if brown.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

fn bench_string_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = string_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("probe-hash", size), &keys, |b, keys| {
            b.iter_batched(
                probe_hash::StringTable::<u32>::new,
                |mut table| {
                    for key in keys {
                        table.insert(key.clone(), 0);
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("hashbrown", size), &keys, |b, keys| {
            b.iter_batched(
                hashbrown::HashMap::<Box<[u8]>, u32>::new,
                |mut map| {
                    for key in keys {
                        map.insert(key.clone(), 0);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_string_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_get");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = string_keys(size);

        let mut table = probe_hash::StringTable::<u32>::new();
        let mut brown = hashbrown::HashMap::<Box<[u8]>, u32>::new();
        for key in &keys {
            table.insert(key.clone(), 0);
            brown.insert(key.clone(), 0);
        }

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("probe-hash", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0u64;
                for key in keys {
                    if table.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
        group.bench_with_input(BenchmarkId::new("hashbrown", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0u64;
                for key in keys {
                    if brown.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_int_insert,
    bench_int_get_zipf,
    bench_string_insert,
    bench_string_get
);
criterion_main!(benches);
