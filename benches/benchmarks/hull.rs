use criterion::{BatchSize, Criterion, criterion_group};
use rand::Rng;

use topolygon::{Geometry, MultiPoint, Point, XY, convex_hull};

type Sample = [[f64; 2]; 1000];

fn random_cloud() -> Geometry {
    let mut rng = rand::rng();

    MultiPoint::from(
        rng.random::<Sample>()
            .iter()
            .map(|&[x, y]| Point::new(XY::new(x, y)))
            .collect::<Vec<_>>(),
    )
    .into()
}

pub fn large_clouds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large clouds");

    group.bench_function("convex hull", |b| {
        b.iter_batched(
            random_cloud,
            |cloud| convex_hull(&cloud),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_clouds);
