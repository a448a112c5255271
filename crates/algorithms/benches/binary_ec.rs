//! Benchmarks for binary elliptic curve operations

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gf2ecdh_algorithms::ec::binary::{
    compute_shared_secret, generate_keypair_with_rng, BinaryCurve, PointFormat, Scalar,
};
use rand::{rngs::OsRng, RngCore};

fn curves() -> Vec<BinaryCurve> {
    vec![
        BinaryCurve::sect163k1().unwrap(),
        BinaryCurve::sect163r2().unwrap(),
        BinaryCurve::sect283k1().unwrap(),
    ]
}

fn bench_field_operations(c: &mut Criterion) {
    for curve in curves() {
        let mut group = c.benchmark_group(format!("{}_field", curve.name()));
        let f = curve.field();

        // Generate test field elements below 2^m
        let excess = f.byte_len() * 8 - f.degree();
        let mut bytes_a = vec![0u8; f.byte_len()];
        let mut bytes_b = vec![0u8; f.byte_len()];
        let mut rng = OsRng;
        rng.fill_bytes(&mut bytes_a);
        rng.fill_bytes(&mut bytes_b);
        bytes_a[0] &= 0xFF >> excess;
        bytes_b[0] &= 0xFF >> excess;

        let a = f.from_bytes(&bytes_a).unwrap();
        let b = f.from_bytes(&bytes_b).unwrap();

        group.bench_function("add", |bencher| bencher.iter(|| a.add(&b)));
        group.bench_function("mul", |bencher| bencher.iter(|| f.mul(&a, &b)));
        group.bench_function("square", |bencher| bencher.iter(|| f.square(&a)));
        group.bench_function("invert", |bencher| bencher.iter(|| f.invert(&a).unwrap()));
        group.bench_function("sqrt", |bencher| bencher.iter(|| f.sqrt(&a)));
        group.bench_function("half_trace", |bencher| {
            bencher.iter(|| f.half_trace(&a).unwrap())
        });

        group.finish();
    }
}

fn bench_point_operations(c: &mut Criterion) {
    for curve in curves() {
        let mut group = c.benchmark_group(format!("{}_point", curve.name()));

        let g = *curve.generator();
        let g2 = curve.double(&g);

        group.bench_function("add", |bencher| bencher.iter(|| curve.add(&g, &g2)));
        group.bench_function("double", |bencher| bencher.iter(|| curve.double(&g)));

        // The multiplier walks the whole limb container, so cost should not
        // depend on the scalar's bit length
        for bits in [32usize, 64, 128, curve.order_bits() - 1] {
            let mut scalar_bytes = vec![0u8; curve.scalar_bytes()];
            let bytes_to_fill = (bits + 7) / 8;
            let start = curve.scalar_bytes() - bytes_to_fill;
            OsRng.fill_bytes(&mut scalar_bytes[start..]);
            scalar_bytes[start] &= 0xFF >> (bytes_to_fill * 8 - bits);
            scalar_bytes[curve.scalar_bytes() - 1] |= 0x01;
            let scalar = curve.scalar_from_bytes(&scalar_bytes).unwrap();

            group.bench_with_input(
                BenchmarkId::new("scalar_mul", format!("{}_bits", bits)),
                &scalar,
                |bencher, scalar| bencher.iter(|| curve.mul(scalar, &g2)),
            );
        }

        group.finish();
    }
}

fn bench_compression(c: &mut Criterion) {
    for curve in curves() {
        let mut group = c.benchmark_group(format!("{}_compression", curve.name()));

        let keypair = generate_keypair_with_rng(&curve, &mut OsRng).unwrap();
        let point = *keypair.public_point();
        let compressed = curve.encode_point(&point, PointFormat::Compressed);

        group.bench_function("compress", |bencher| {
            bencher.iter(|| curve.encode_point(&point, PointFormat::Compressed))
        });
        group.bench_function("decompress", |bencher| {
            bencher.iter(|| curve.decode_point(&compressed).unwrap())
        });

        group.finish();
    }
}

fn bench_ecdh(c: &mut Criterion) {
    for curve in curves() {
        let mut group = c.benchmark_group(format!("{}_ecdh", curve.name()));

        group.bench_function("generate_keypair", |bencher| {
            bencher.iter(|| generate_keypair_with_rng(&curve, &mut OsRng).unwrap())
        });

        let alice = generate_keypair_with_rng(&curve, &mut OsRng).unwrap();
        let bob = generate_keypair_with_rng(&curve, &mut OsRng).unwrap();

        group.bench_function("shared_secret", |bencher| {
            bencher.iter(|| {
                compute_shared_secret(&curve, alice.private_scalar(), bob.public_point()).unwrap()
            })
        });

        group.finish();
    }
}

fn bench_scalar_mult_base(c: &mut Criterion) {
    let curve = BinaryCurve::sect163r2().unwrap();
    let scalar = Scalar::from_u64(0xDEAD_BEEF_CAFE_F00D);

    c.bench_function("sect163r2_scalar_mult_base_g", |bencher| {
        bencher.iter(|| curve.mul_base(&scalar))
    });
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_point_operations,
    bench_compression,
    bench_ecdh,
    bench_scalar_mult_base
);

criterion_main!(benches);
