use crate::determinant::{Orientation, orientation};
use crate::geometry::{Geometry, LineString, Point, Polygon};
use crate::sequence::Sequence;
use crate::xy::XY;

/// Returns the convex hull of the given geometry, projected to the plane.
///
/// Depending on the rank of the input's point set, the hull is a point
/// (fewer than two distinct coordinates), a line string (all coordinates on
/// one straight line) or a polygon with a single counter-clockwise exterior
/// ring. An empty input is returned as is, which replicates the PostGIS/GEOS
/// convention.
pub fn convex_hull(geometry: &Geometry) -> Geometry {
    if geometry.is_empty() {
        return geometry.clone();
    }

    let mut points = point_set(geometry);

    if !has_two_distinct_points(&points) {
        return Point::new(points[0]).into();
    }

    let hull = monotone_chain(&mut points);
    log::debug!("monotone chain kept {} of {} points", hull.len(), points.len());

    if let Some(path) = linear_hull(&hull) {
        let endpoints = vec![path[0], path[path.len() - 1]];
        return LineString::new(endpoints.into()).into();
    }

    let ring = Sequence::from(hull);
    if !ring.is_closed() || ring.len() < 4 {
        panic!("monotone chain produced an invalid ring: {ring:?}");
    }

    Polygon::new(vec![ring]).into()
}

/// Returns every coordinate of the given geometry that may lie on its convex
/// hull. Hole rings are skipped: no interior ring can contribute a hull
/// vertex.
fn point_set(geometry: &Geometry) -> Vec<XY> {
    match geometry {
        Geometry::Point(point) => point.xy().into_iter().collect(),
        Geometry::LineString(line_string) => line_string.coordinates().iter().collect(),
        Geometry::Polygon(polygon) => polygon
            .exterior()
            .map(|ring| ring.iter().collect())
            .unwrap_or_default(),
        Geometry::MultiPoint(multi_point) => {
            multi_point.points().filter_map(Point::xy).collect()
        }
        Geometry::MultiLineString(multi_line_string) => multi_line_string
            .line_strings()
            .iter()
            .flat_map(|line_string| line_string.coordinates().iter())
            .collect(),
        Geometry::MultiPolygon(multi_polygon) => multi_polygon
            .polygons()
            .iter()
            .filter_map(Polygon::exterior)
            .flat_map(Sequence::iter)
            .collect(),
        Geometry::GeometryCollection(collection) => {
            collection.geometries().iter().flat_map(point_set).collect()
        }
    }
}

/// Returns true if, and only if, the given points contain at least two
/// distinct coordinates.
fn has_two_distinct_points(points: &[XY]) -> bool {
    points
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().any(|point| point != first))
}

/// Runs Andrew's monotone chain over the given points and returns the hull
/// as a closed counter-clockwise walk (first coordinate repeated at the
/// end).
///
/// Only strict left turns keep a point on either chain, so collinear hull
/// points are discarded and the hull is minimal.
fn monotone_chain(points: &mut [XY]) -> Vec<XY> {
    points.sort_unstable();

    let mut lower: Vec<XY> = Vec::new();
    for &point in points.iter() {
        while lower.len() >= 2
            && orientation(lower[lower.len() - 2], lower[lower.len() - 1], point)
                != Orientation::LeftTurn
        {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<XY> = Vec::new();
    for &point in points.iter().rev() {
        while upper.len() >= 2
            && orientation(upper[upper.len() - 2], upper[upper.len() - 1], point)
                != Orientation::LeftTurn
        {
            upper.pop();
        }
        upper.push(point);
    }

    // The first point of the upper chain duplicates the last point of the
    // lower chain; the seam on the other side closes the walk.
    lower.extend_from_slice(&upper[1..]);
    lower
}

/// Returns the out-and-back half of the given hull walk when the whole walk
/// runs along a single straight line.
fn linear_hull(hull: &[XY]) -> Option<&[XY]> {
    if hull.len() % 2 == 0 {
        return None;
    }
    let middle = hull.len() / 2;
    if hull[middle - 1] != hull[middle + 1] {
        return None;
    }
    Some(&hull[..=middle])
}
