use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::geometry::{Geometry, LineString, MultiLineString, MultiPoint, Point};
use crate::xy::XY;

/// The coordinates at which a set of geometries interact: every point
/// element, every line string endpoint, and every crossing or
/// self-reversal of a linear element.
pub type InteractionSet = HashSet<XY>;

/// Returns the interaction points (self-interaction points included)
/// between the given geometries.
///
/// The inputs are assumed to be correctly noded with respect to each other
/// and to carry no consecutive repeated coordinates. Geometry collections
/// are not supported; the caller flattens them beforehand.
pub fn find_interaction_points(
    geometries: &[Geometry],
) -> Result<InteractionSet, TopologyError> {
    let mut interactions = InteractionSet::new();

    // Tracks the neighbors either side of each interior vertex of a linear
    // element. Two linear elements running through a vertex with the same
    // neighbors merely overlap there, while differing neighbors mean the
    // elements cross and the vertex is an interaction point.
    let mut adjacents: HashMap<XY, AdjacentPair> = HashMap::new();

    for geometry in geometries {
        add_geometry(geometry, &mut adjacents, &mut interactions)?;
    }
    Ok(interactions)
}

/// The canonicalized neighbors either side of an interior vertex.
///
/// Canonical form is lexicographic order of the two coordinates, so a pair
/// carries no directionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjacentPair {
    first: XY,
    second: XY,
}

impl AdjacentPair {
    fn new(prev: XY, next: XY) -> Self {
        if next < prev {
            Self {
                first: next,
                second: prev,
            }
        } else {
            Self {
                first: prev,
                second: next,
            }
        }
    }
}

fn add_geometry(
    geometry: &Geometry,
    adjacents: &mut HashMap<XY, AdjacentPair>,
    interactions: &mut InteractionSet,
) -> Result<(), TopologyError> {
    match geometry {
        Geometry::Point(point) => add_point(point, interactions),
        Geometry::MultiPoint(multi_point) => add_multi_point(multi_point, interactions),
        Geometry::LineString(line_string) => {
            add_line_string(line_string, adjacents, interactions)
        }
        Geometry::MultiLineString(multi_line_string) => {
            add_multi_line_string(multi_line_string, adjacents, interactions)
        }
        Geometry::Polygon(polygon) => {
            add_multi_line_string(&polygon.boundary(), adjacents, interactions)
        }
        Geometry::MultiPolygon(multi_polygon) => {
            add_multi_line_string(&multi_polygon.boundary(), adjacents, interactions)
        }
        Geometry::GeometryCollection(_) => return Err(TopologyError::UnsupportedGeometry),
    }
    Ok(())
}

fn add_line_string(
    line_string: &LineString,
    adjacents: &mut HashMap<XY, AdjacentPair>,
    interactions: &mut InteractionSet,
) {
    if let Some(xy) = line_string.start_point() {
        interactions.insert(xy);
    }
    if let Some(xy) = line_string.end_point() {
        interactions.insert(xy);
    }

    let seq = line_string.coordinates();
    let n = seq.len();
    for i in 1..n.saturating_sub(1) {
        let prev = seq.get(i - 1);
        let curr = seq.get(i);
        let next = seq.get(i + 1);

        if prev == next {
            // The line string loops back on itself; the reversal point is an
            // interaction point.
            interactions.insert(curr);
            continue;
        }

        let pair = AdjacentPair::new(prev, next);
        match adjacents.get(&curr) {
            Some(existing) if *existing != pair => {
                interactions.insert(curr);
            }
            Some(_) => {}
            None => {
                adjacents.insert(curr, pair);
            }
        }
    }
}

fn add_multi_line_string(
    multi_line_string: &MultiLineString,
    adjacents: &mut HashMap<XY, AdjacentPair>,
    interactions: &mut InteractionSet,
) {
    for line_string in multi_line_string.line_strings() {
        add_line_string(line_string, adjacents, interactions);
    }
}

fn add_point(point: &Point, interactions: &mut InteractionSet) {
    if let Some(xy) = point.xy() {
        interactions.insert(xy);
    }
}

fn add_multi_point(multi_point: &MultiPoint, interactions: &mut InteractionSet) {
    for point in multi_point.points() {
        add_point(point, interactions);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::TopologyError;
    use crate::geometry::{
        Geometry, GeometryCollection, LineString, MultiPoint, Point, Polygon,
    };
    use crate::interaction::find_interaction_points;
    use crate::xy::{XY, xy};

    fn line_string(coords: Vec<[f64; 2]>) -> Geometry {
        LineString::new(coords.into()).into()
    }

    fn coords(coords: Vec<[f64; 2]>) -> HashSet<XY> {
        coords.into_iter().map(XY::from).collect()
    }

    #[test]
    fn interaction_points_of_geometries() {
        struct Test {
            name: &'static str,
            geometries: Vec<Geometry>,
            want: HashSet<XY>,
        }

        vec![
            Test {
                name: "no geometries",
                geometries: Vec::new(),
                want: HashSet::new(),
            },
            Test {
                name: "isolated point",
                geometries: vec![Point::new(xy!(1., 2.)).into()],
                want: coords(vec![[1., 2.]]),
            },
            Test {
                name: "empty point contributes nothing",
                geometries: vec![Point::empty().into()],
                want: HashSet::new(),
            },
            Test {
                name: "multi point keeps only occupied elements",
                geometries: vec![
                    MultiPoint::from(vec![
                        Point::new(xy!(0., 0.)),
                        Point::empty(),
                        Point::new(xy!(2., 2.)),
                    ])
                    .into(),
                ],
                want: coords(vec![[0., 0.], [2., 2.]]),
            },
            Test {
                name: "simple line interacts only at its endpoints",
                geometries: vec![line_string(vec![[0., 0.], [1., 0.], [2., 1.], [3., 1.]])],
                want: coords(vec![[0., 0.], [3., 1.]]),
            },
            Test {
                name: "noded self-crossing line",
                geometries: vec![line_string(vec![
                    [0., 0.],
                    [1., 1.],
                    [2., 2.],
                    [0., 2.],
                    [1., 1.],
                    [2., 0.],
                ])],
                // (2,2) and (0,2) are plain corners: each occurs in a single
                // segment context, so only the crossing at (1,1) interacts.
                want: coords(vec![[0., 0.], [2., 0.], [1., 1.]]),
            },
            Test {
                name: "self-crossing line noded into single segments",
                geometries: vec![
                    line_string(vec![[0., 0.], [1., 1.]]),
                    line_string(vec![[1., 1.], [2., 2.]]),
                    line_string(vec![[2., 2.], [0., 2.]]),
                    line_string(vec![[0., 2.], [1., 1.]]),
                    line_string(vec![[1., 1.], [2., 0.]]),
                ],
                want: coords(vec![[0., 0.], [2., 0.], [0., 2.], [2., 2.], [1., 1.]]),
            },
            Test {
                name: "line reversing on itself",
                geometries: vec![line_string(vec![[0., 0.], [2., 0.], [0., 0.]])],
                want: coords(vec![[0., 0.], [2., 0.]]),
            },
            Test {
                name: "two lines crossing at a shared vertex",
                geometries: vec![
                    line_string(vec![[0., 0.], [1., 1.], [2., 2.]]),
                    line_string(vec![[2., 0.], [1., 1.], [0., 2.]]),
                ],
                want: coords(vec![[0., 0.], [2., 2.], [2., 0.], [0., 2.], [1., 1.]]),
            },
            Test {
                name: "coincident lines overlap without interacting",
                geometries: vec![
                    line_string(vec![[0., 0.], [1., 1.], [2., 2.], [3., 3.]]),
                    line_string(vec![[3., 3.], [2., 2.], [1., 1.], [0., 0.]]),
                ],
                // The adjacent pairs coincide at every shared interior
                // vertex, whichever direction the lines run.
                want: coords(vec![[0., 0.], [3., 3.]]),
            },
            Test {
                name: "partially overlapping lines interact where they diverge",
                geometries: vec![
                    line_string(vec![[0., 0.], [1., 1.], [2., 2.], [3., 3.]]),
                    line_string(vec![[4., 4.], [2., 2.], [1., 1.], [0., 0.]]),
                ],
                want: coords(vec![[0., 0.], [2., 2.], [3., 3.], [4., 4.]]),
            },
            Test {
                name: "touching triangles interact at corners but not inside the shared edge",
                geometries: vec![
                    Polygon::new(vec![
                        vec![
                            [2., 2.],
                            [0., 0.],
                            [1., 0.],
                            [2., 0.],
                            [3., 0.],
                            [4., 0.],
                            [2., 2.],
                        ]
                        .into(),
                    ])
                    .into(),
                    Polygon::new(vec![
                        vec![
                            [2., -2.],
                            [4., 0.],
                            [3., 0.],
                            [2., 0.],
                            [1., 0.],
                            [0., 0.],
                            [2., -2.],
                        ]
                        .into(),
                    ])
                    .into(),
                ],
                want: coords(vec![[2., 2.], [2., -2.], [0., 0.], [4., 0.]]),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = find_interaction_points(&test.geometries)
                .unwrap_or_else(|err| panic!("{}: unexpected error {err}", test.name));
            assert_eq!(
                got, test.want,
                "{}: got = {got:?}, want = {:?}",
                test.name, test.want
            );
        });
    }

    #[test]
    fn geometry_collections_are_rejected() {
        let collection: Geometry = GeometryCollection::from(vec![
            Point::new(xy!(0., 0.)).into(),
        ])
        .into();

        let got = find_interaction_points(&[collection]);
        assert!(
            matches!(got, Err(TopologyError::UnsupportedGeometry)),
            "got = {got:?}, want unsupported geometry error",
        );
    }
}
