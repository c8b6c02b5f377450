use criterion::{criterion_group, criterion_main, Criterion};
use matrix2x2::{Matrix2x2D, Matrix2x2F, Vector2D};
use rand::Rng;
use std::hint::black_box;

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    let mut rng = rand::rng();

    let a = Matrix2x2D::from_array(&rng.random::<[f64; 4]>());
    let b = Matrix2x2D::from_array(&rng.random::<[f64; 4]>());
    let v = Vector2D::new(rng.random(), rng.random());

    group.bench_function("matrix_f64", |bencher| {
        bencher.iter(|| black_box(black_box(a).mul_matrix(&black_box(b))))
    });

    group.bench_function("vector_f64", |bencher| {
        bencher.iter(|| black_box(black_box(a).mul_vector(&black_box(v))))
    });

    let af = Matrix2x2F::from_array(&rng.random::<[f32; 4]>());
    let bf = Matrix2x2F::from_array(&rng.random::<[f32; 4]>());

    group.bench_function("matrix_f32", |bencher| {
        bencher.iter(|| black_box(black_box(af) * black_box(bf)))
    });

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let m = Matrix2x2D::new(4.0, 7.0, 2.0, 6.0);

    group.bench_function("inverse", |bencher| {
        bencher.iter(|| black_box(black_box(m).inverse()))
    });

    group.bench_function("try_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(m).try_inverse()))
    });

    group.finish();
}

criterion_group!(benches, bench_mul, bench_inverse);
criterion_main!(benches);
