#[macro_use]
extern crate criterion;
extern crate fractalgen;

use criterion::Criterion;
use fractalgen::{render, FractalRequest, FractalType};

fn bench_render(c: &mut Criterion) {
    c.bench_function("mandelbrot 64x64", |b| {
        let mut request = FractalRequest::new(FractalType::Mandelbrot, 64, 64).unwrap();
        request.limit = 200;
        b.iter(|| render(&request).unwrap())
    });

    c.bench_function("lyapunov 64x64", |b| {
        let mut request = FractalRequest::new(FractalType::Lyapunov, 64, 64).unwrap();
        request.limit = 300;
        b.iter(|| render(&request).unwrap())
    });

    c.bench_function("hilbert order 6 at 256px", |b| {
        let mut request = FractalRequest::new(FractalType::HilbertCurve, 256, 256).unwrap();
        request.limit = 6;
        b.iter(|| render(&request).unwrap())
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
