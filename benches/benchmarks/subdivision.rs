use criterion::{BatchSize, Criterion, criterion_group};

use topolygon::{
    Dcel, Geometry, InteractionSet, LineString, MultiLineString, Operand, Polygon, XY,
};

/// A regular ring with the given amount of vertices, every one of them an
/// interaction point, as are the ghost endpoints.
fn ring_operand(vertices: usize) -> (Geometry, InteractionSet) {
    let mut coords = Vec::with_capacity(vertices + 1);
    for position in 0..vertices {
        let angle = (position as f64) / (vertices as f64) * std::f64::consts::TAU;
        coords.push(XY::new(angle.cos(), angle.sin()));
    }
    coords.push(coords[0]);

    let mut interactions: InteractionSet = coords.iter().copied().collect();
    for line_string in ghost_line().line_strings() {
        interactions.extend(line_string.coordinates().iter());
    }
    let polygon = Polygon::new(vec![coords.into_iter().collect()]);

    (polygon.into(), interactions)
}

/// A ghost line reaching the ring from outside, stitched at an existing
/// vertex.
fn ghost_line() -> MultiLineString {
    MultiLineString::from(vec![LineString::new(
        vec![XY::new(1., 0.), XY::new(3., 0.)].into(),
    )])
}

pub fn large_rings(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large rings");

    for vertices in [256, 4096] {
        group.bench_function(format!("build ring of {vertices}"), |b| {
            b.iter_batched(
                || ring_operand(vertices),
                |(geometry, interactions)| {
                    Dcel::from_geometry(&geometry, &ghost_line(), Operand::A, &interactions)
                },
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(benches, large_rings);
