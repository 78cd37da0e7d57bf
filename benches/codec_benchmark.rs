// benches/codec_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use td6_rs::codec::{self, checksum};

fn sample_body(size: usize) -> Vec<u8> {
    // Zero-filled stretches alternating with varied bytes, like a header followed by segment pairs
    (0..size)
        .map(|i| if (i / 64) % 2 == 0 { 0 } else { (i * 31 % 251) as u8 })
        .collect()
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rle_encode");

    for size in [1000, 10000, 100000].iter() {
        let body = sample_body(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| codec::encode(black_box(body)));
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rle_decode");

    for size in [1000, 10000, 100000].iter() {
        let file = codec::encode(&sample_body(*size));
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &file, |b, file| {
            b.iter(|| codec::decode(black_box(file)));
        });
    }

    group.finish();
}

fn benchmark_checksum(c: &mut Criterion) {
    let body = sample_body(100000);
    c.bench_function("checksum_100k", |b| b.iter(|| checksum::compute(black_box(&body))));
}

criterion_group!(benches, benchmark_encode, benchmark_decode, benchmark_checksum);
criterion_main!(benches);
