use criterion::{Criterion, black_box, criterion_group, criterion_main};
use notebook_helpers::{ECLevel, EncodeOptions, Encoder, QrEncoder, radius_sphere};

fn bench_encode_short(c: &mut Criterion) {
    let encoder = Encoder::default();
    c.bench_function("encode_short_url", |b| {
        b.iter(|| encoder.encode(black_box(b"https://example.com")))
    });
}

fn bench_encode_numeric(c: &mut Criterion) {
    let encoder = Encoder::default();
    let digits = vec![b'7'; 500];
    c.bench_function("encode_500_digits", |b| {
        b.iter(|| encoder.encode(black_box(&digits)))
    });
}

fn bench_encode_large_high_ec(c: &mut Criterion) {
    let encoder = Encoder::new(EncodeOptions::default().with_ec_level(ECLevel::H));
    let payload = vec![b'x'; 1000];
    c.bench_function("encode_1000_bytes_h", |b| {
        b.iter(|| encoder.encode(black_box(&payload)))
    });
}

fn bench_radius(c: &mut Criterion) {
    c.bench_function("radius_sphere", |b| b.iter(|| radius_sphere(black_box(1234.5))));
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_numeric,
    bench_encode_large_high_ec,
    bench_radius
);
criterion_main!(benches);
