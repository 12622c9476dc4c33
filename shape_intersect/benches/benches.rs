use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use shape_intersect::{
    intersect::{has_intersection, intersect},
    shape::Shape,
};
use test_shapes::*;

fn bench_intersect(b: &mut Bencher, (a, c): &(Shape, Shape)) {
    b.iter(|| {
        intersect(a, c);
    })
}

fn bench_has_intersection(b: &mut Bencher, (a, c): &(Shape, Shape)) {
    b.iter(|| {
        has_intersection(a, c);
    })
}

fn intersect_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for (name, a, b) in shape_pairs() {
        group.bench_with_input(BenchmarkId::new("intersect", name), &(a, b), |bench, pair| {
            bench_intersect(bench, pair)
        });
        group.bench_with_input(
            BenchmarkId::new("has_intersection", name),
            &(a, b),
            |bench, pair| bench_has_intersection(bench, pair),
        );
    }

    group.finish();
}

criterion_group!(intersect_benches, intersect_group,);
criterion_main!(intersect_benches);
