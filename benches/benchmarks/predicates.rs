use criterion::{BatchSize, Criterion, criterion_group};
use polyrel::{Point, Polygon};
use rand::Rng;

/// Returns a ragged but non-self-crossing polygon of the given amount of
/// vertices, walking a circle of randomized radius.
fn random_polygon(vertices: usize) -> Polygon<f64> {
    let mut rng = rand::rng();

    let points = (0..vertices)
        .map(|vertex| {
            let angle = (vertex as f64) / (vertices as f64) * std::f64::consts::TAU;
            let radius = rng.random_range(50.0..100.0);
            Point {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect();

    Polygon::new(points, Vec::new())
}

fn random_operands() -> [Polygon<f64>; 2] {
    [random_polygon(1000), random_polygon(1000)]
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("contains point", |b| {
        b.iter_batched(
            || random_polygon(1000),
            |polygon| {
                polygon.contains_point(&Point { x: 0., y: 0. });
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("contains polygon", |b| {
        b.iter_batched(
            || random_operands(),
            |[polygon, other]| {
                polygon.contains_polygon(&other);
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("intersects polygon", |b| {
        b.iter_batched(
            || random_operands(),
            |[polygon, other]| {
                polygon.intersects_polygon(&other);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_polygons);
