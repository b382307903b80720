use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use endian_bitvec::{BitVec, Endianness};
use std::hint::black_box;

const WORDS: usize = 1024;

/// A mostly-full bitmap with a single hole near the end, so scans walk far.
fn fill(words: &mut [u64], endianness: Endianness) {
    let mut bits = BitVec::new(bytemuck::cast_slice_mut(words), endianness).unwrap();
    bits.set_all();
    bits.clear(bits.len() - 100);
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scans");

    for endianness in [Endianness::Little, Endianness::Big] {
        let mut words = vec![0u64; WORDS];
        fill(&mut words, endianness);
        let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), endianness).unwrap();

        group.bench_function(BenchmarkId::new("find_first_zero", endianness), |b| {
            b.iter(|| black_box(bits.find_first_zero(black_box(0))))
        });

        bits.set_all();
        bits.clear_all();
        bits.set(5);
        group.bench_function(BenchmarkId::new("find_last_one", endianness), |b| {
            b.iter(|| black_box(bits.find_last_one()))
        });
        group.bench_function(BenchmarkId::new("find_first_one", endianness), |b| {
            b.iter(|| black_box(bits.find_first_one(black_box(6))))
        });

        group.bench_function(BenchmarkId::new("set_clear", endianness), |b| {
            b.iter(|| {
                let idx = black_box(4097);
                bits.set(idx);
                bits.clear(idx);
                black_box(bits.test(idx))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scans);
criterion_main!(benches);
