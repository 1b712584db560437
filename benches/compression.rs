use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lzstring_rs::{
    compress, compress_to_base64, compress_to_utf16, decompress, decompress_from_base64,
};

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> String {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate JSON-like data, the format lz-string is typically fed
fn generate_json_like(size: usize) -> String {
    let patterns = [
        "{\"id\":42,\"name\":\"item\",",
        "\"tags\":[\"alpha\",\"beta\"],",
        "\"enabled\":true,\"score\":0.75},",
        "{\"id\":43,\"name\":\"other\",",
        "\"tags\":[],\"enabled\":false},",
    ];

    let mut result = String::new();
    let mut i = 0;
    while result.len() < size {
        result.push_str(patterns[i % patterns.len()]);
        i += 1;
    }
    result.truncate(size);
    result
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> String {
    let chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut result = String::new();
    let mut seed = 12345u64;

    for _ in 0..size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let idx = (seed % chars.len() as u64) as usize;
        result.push(chars.as_bytes()[idx] as char);
    }
    result
}

fn bench_compress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("compress");

    for size in sizes.iter() {
        for (name, data) in [
            ("repetitive", generate_repetitive_text(*size)),
            ("json_like", generate_json_like(*size)),
            ("low_repetition", generate_low_repetition(*size)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| black_box(compress(black_box(data.as_str()))));
            });
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("decompress");

    for size in sizes.iter() {
        let compressed = compress(generate_json_like(*size).as_str());

        group.bench_with_input(
            BenchmarkId::new("json_like", size),
            &compressed,
            |b, compressed| {
                b.iter(|| black_box(decompress(black_box(compressed.as_slice()))));
            },
        );
    }

    group.finish();
}

fn bench_framings(c: &mut Criterion) {
    let data = generate_json_like(10_000);
    let mut group = c.benchmark_group("framings");

    group.bench_function("base64_encode", |b| {
        b.iter(|| black_box(compress_to_base64(black_box(data.as_str()))));
    });

    let encoded = compress_to_base64(data.as_str());
    group.bench_function("base64_decode", |b| {
        b.iter(|| black_box(decompress_from_base64(black_box(encoded.as_str()))));
    });

    group.bench_function("utf16_encode", |b| {
        b.iter(|| black_box(compress_to_utf16(black_box(data.as_str()))));
    });

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_framings);
criterion_main!(benches);
