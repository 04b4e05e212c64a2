//! Planar-subdivision core for set-theoretic overlay of 2D simple features.
//!
//! Three operations make up the public surface: [`convex_hull`],
//! [`find_interaction_points`] and the [`Dcel`] builder. Callers node their
//! inputs externally, find the interaction points of both operands plus
//! their ghost lines, and build one subdivision per overlay; downstream
//! passes label faces and extract the overlay outputs.

mod dcel;
mod determinant;
mod error;
mod geometry;
mod hull;
mod interaction;
mod sequence;
mod xy;

pub use self::dcel::{
    Dcel, FaceId, FaceRecord, HalfEdgeId, HalfEdgeRecord, Location, Operand, VertexId,
    VertexRecord,
};
pub use self::determinant::{Orientation, orientation};
pub use self::error::TopologyError;
pub use self::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use self::hull::convex_hull;
pub use self::interaction::{InteractionSet, find_interaction_points};
pub use self::sequence::Sequence;
pub use self::xy::XY;
