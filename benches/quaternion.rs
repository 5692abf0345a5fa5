use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quaternion::Quaternion;

fn create_quaternion() -> Quaternion {
    Quaternion::new(1.0, 2.0, -0.5, -1.0)
}

pub fn bench_mul_quaternion(c: &mut Criterion) {
    let a = create_quaternion();
    let b = Quaternion::new(-3.0, 4.0, 0.0, 2.0);
    c.bench_function("mul_quaternion", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)));
    });
}

pub fn bench_inv_quaternion(c: &mut Criterion) {
    let a = create_quaternion();
    c.bench_function("inv_quaternion", |bencher| {
        bencher.iter(|| black_box(black_box(a).inv()));
    });
}

pub fn bench_exp_quaternion(c: &mut Criterion) {
    let a = create_quaternion();
    c.bench_function("exp_quaternion", |bencher| {
        bencher.iter(|| black_box(black_box(a).exp()));
    });
}

pub fn bench_ln_quaternion(c: &mut Criterion) {
    let a = create_quaternion();
    c.bench_function("ln_quaternion", |bencher| {
        bencher.iter(|| black_box(black_box(a).ln()));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        bench_mul_quaternion,
        bench_inv_quaternion,
        bench_exp_quaternion,
        bench_ln_quaternion,
);
criterion_main!(benches);
