use crate::xy::XY;

/// A single, possibly empty, position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    xy: Option<XY>,
}

impl From<XY> for Point {
    fn from(xy: XY) -> Self {
        Self { xy: Some(xy) }
    }
}

impl Point {
    /// Returns the point at the given coordinate.
    pub fn new(xy: XY) -> Self {
        xy.into()
    }

    /// Returns the point with no coordinate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the coordinate of the point, if any.
    pub fn xy(&self) -> Option<XY> {
        self.xy
    }

    /// Returns true if, and only if, the point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.xy.is_none()
    }

    /// Returns self as a [`MultiPoint`] of one.
    pub fn to_multi_point(&self) -> MultiPoint {
        MultiPoint::from(vec![*self])
    }
}

/// An unordered collection of [`Point`]s, empty elements included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl From<Vec<Point>> for MultiPoint {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl MultiPoint {
    /// Returns an iterator over all the points of the collection.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Returns true if, and only if, no point in the collection has a
    /// coordinate.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Point::is_empty)
    }
}
