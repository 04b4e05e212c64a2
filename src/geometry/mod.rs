mod line_string;
mod point;
mod polygon;

pub use self::line_string::{LineString, MultiLineString};
pub use self::point::{MultiPoint, Point};
pub use self::polygon::{MultiPolygon, Polygon};

/// A geometry in the plane.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Self::LineString(line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi_point: MultiPoint) -> Self {
        Self::MultiPoint(multi_point)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(multi_line_string: MultiLineString) -> Self {
        Self::MultiLineString(multi_line_string)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi_polygon: MultiPolygon) -> Self {
        Self::MultiPolygon(multi_polygon)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(collection: GeometryCollection) -> Self {
        Self::GeometryCollection(collection)
    }
}

impl Geometry {
    /// Returns true if, and only if, the geometry holds no coordinate at
    /// all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(point) => point.is_empty(),
            Geometry::LineString(line_string) => line_string.is_empty(),
            Geometry::Polygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi_point) => multi_point.is_empty(),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.is_empty(),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.is_empty(),
            Geometry::GeometryCollection(collection) => collection.is_empty(),
        }
    }

    /// Returns the topological dimension of the geometry: 0 for puntal, 1
    /// for lineal and 2 for areal variants. Collections take the maximum of
    /// their children, or 0 when empty.
    pub fn dimension(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => 2,
            Geometry::GeometryCollection(collection) => collection
                .geometries()
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or_default(),
        }
    }
}

/// An heterogeneous collection of [`Geometry`] values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }
}

impl GeometryCollection {
    /// Returns the geometries in the collection.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Returns true if, and only if, every geometry in the collection is
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.geometries.iter().all(Geometry::is_empty)
    }
}
