use crate::geometry::line_string::{LineString, MultiLineString};
use crate::sequence::Sequence;

/// An areal region bounded by one exterior ring and any number of interior
/// holes.
///
/// Every ring is a closed sequence. Ring validity (closedness, no
/// self-intersection) is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    /// The boundary rings, exterior first.
    rings: Vec<Sequence>,
}

impl From<Vec<Sequence>> for Polygon {
    fn from(rings: Vec<Sequence>) -> Self {
        Self { rings }
    }
}

impl Polygon {
    /// Returns the polygon bounded by the given rings, exterior first.
    pub fn new(rings: Vec<Sequence>) -> Self {
        rings.into()
    }

    /// Returns the exterior ring, if any.
    pub fn exterior(&self) -> Option<&Sequence> {
        self.rings.first()
    }

    /// Returns the interior hole rings.
    pub fn interiors(&self) -> &[Sequence] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Returns all the boundary rings, exterior first.
    pub fn rings(&self) -> &[Sequence] {
        &self.rings
    }

    /// Returns true if, and only if, the polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Returns the boundary of the polygon: every ring as a line string.
    pub fn boundary(&self) -> MultiLineString {
        self.rings
            .iter()
            .cloned()
            .map(LineString::new)
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns an equivalent polygon in canonical orientation: exterior ring
    /// counter-clockwise, holes clockwise.
    pub fn force_ccw(&self) -> Polygon {
        self.rings
            .iter()
            .enumerate()
            .map(|(position, ring)| {
                let exterior = position == 0;
                if ring.is_clockwise() == exterior {
                    ring.reversed()
                } else {
                    ring.clone()
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns self as a [`MultiPolygon`] of one.
    pub fn to_multi_polygon(&self) -> MultiPolygon {
        MultiPolygon::from(vec![self.clone()])
    }
}

/// A collection of disjoint [`Polygon`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

impl MultiPolygon {
    /// Returns the polygons in the collection.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns true if, and only if, every polygon in the collection is
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
    }

    /// Returns the boundary of the collection: every ring of every polygon
    /// as a line string.
    pub fn boundary(&self) -> MultiLineString {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.boundary().line_strings().to_vec())
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns an equivalent collection with every polygon in canonical
    /// orientation.
    pub fn force_ccw(&self) -> MultiPolygon {
        self.polygons
            .iter()
            .map(Polygon::force_ccw)
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::polygon::Polygon;
    use crate::sequence::Sequence;

    #[test]
    fn canonical_orientation() {
        struct Test {
            name: &'static str,
            polygon: Polygon,
            want: Polygon,
        }

        let ccw_square: Sequence = vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.], [0., 0.]].into();
        let cw_square = ccw_square.reversed();
        let cw_hole: Sequence = vec![[1., 1.], [1., 2.], [2., 2.], [2., 1.], [1., 1.]].into();
        let ccw_hole = cw_hole.reversed();

        vec![
            Test {
                name: "already canonical",
                polygon: Polygon::new(vec![ccw_square.clone(), cw_hole.clone()]),
                want: Polygon::new(vec![ccw_square.clone(), cw_hole.clone()]),
            },
            Test {
                name: "clockwise exterior is reversed",
                polygon: Polygon::new(vec![cw_square.clone()]),
                want: Polygon::new(vec![ccw_square.clone()]),
            },
            Test {
                name: "counter-clockwise hole is reversed",
                polygon: Polygon::new(vec![ccw_square.clone(), ccw_hole.clone()]),
                want: Polygon::new(vec![ccw_square.clone(), cw_hole.clone()]),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.polygon.force_ccw();
            assert_eq!(
                got, test.want,
                "{}: got = {got:?}, want = {:?}",
                test.name, test.want
            );
        });
    }
}
