use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use dxt_decode_bc3::{decode_bc3, decode_bc3_into, util::decode_bc3_block};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC3 Decode");

    // Set up the test data - 16MB of BC3 blocks (a 4096x4096 texture)
    let bc3_size = 16777216; // 16MB
    let width = 4096;
    let height = 4096;

    // This creates simple BC3 blocks with varying colors
    // Real-world data would have more variety, but this is suitable for benchmarking
    let input: Vec<u8> = (0..bc3_size).map(|i| (i % 255) as u8).collect();
    let mut output = vec![0u8; width * height * 4];

    group.throughput(criterion::Throughput::Bytes(bc3_size as u64));

    group.bench_function("decode_bc3_block", |b| {
        b.iter(|| {
            for block in input.chunks_exact(16) {
                let block: &[u8; 16] = block.try_into().unwrap();
                black_box(decode_bc3_block(black_box(block)));
            }
        })
    });

    group.bench_function("decode_bc3", |b| {
        b.iter(|| decode_bc3(black_box(&input), width as u32, height as u32).unwrap())
    });

    group.bench_function("decode_bc3_into", |b| {
        b.iter(|| {
            decode_bc3_into(black_box(&input), width as u32, height as u32, &mut output).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
