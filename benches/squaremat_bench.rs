use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squaremat::SquareMat;

pub fn prod(c: &mut Criterion) {
    let n = 25;
    let this = black_box(SquareMat::from_data(n, vec![1.23123; n * n]).unwrap());
    let other = black_box(SquareMat::from_data(n, vec![1.23123; n * n]).unwrap());

    c.bench_function("prod", |b| b.iter(|| this.prod(&other)));
}

pub fn pow(c: &mut Criterion) {
    let n = 10;
    let this = black_box(SquareMat::from_data(n, vec![0.5; n * n]).unwrap());

    c.bench_function("pow", |b| b.iter(|| this.pow(black_box(16))));
}

pub fn determinant(c: &mut Criterion) {
    let n = 8;
    let mut this = SquareMat::eye(n).unwrap();
    for r in 0..n {
        for c in 0..n {
            this[r][c] += (r * n + c) as squaremat::Float / 10.0;
        }
    }
    let this = black_box(this);

    c.bench_function("determinant", |b| b.iter(|| this.determinant()));
}

criterion_group!(benches, prod, pow, determinant);
criterion_main!(benches);
