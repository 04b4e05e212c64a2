mod builder;
mod edge_set;

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::error::TopologyError;
use crate::sequence::Sequence;
use crate::xy::XY;

/// The side of a binary overlay operation that contributed a graph element.
///
/// Unary operations use [`Operand::A`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The first operand of the operation.
    A,
    /// The second operand of the operation.
    B,
}

impl Operand {
    /// Returns the position of this operand inside per-operand flag arrays.
    pub fn index(self) -> usize {
        match self {
            Operand::A => 0,
            Operand::B => 1,
        }
    }
}

/// Where a vertex lies relative to one operand's point set.
///
/// At most one of the two flags is set; both unset means the relation is
/// unknown or irrelevant (e.g. a ghost junction).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// The vertex lies on the operand's boundary.
    pub boundary: bool,
    /// The vertex lies in the operand's interior.
    pub interior: bool,
}

/// The position of a [`VertexRecord`] inside its [`Dcel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// The position of a [`HalfEdgeRecord`] inside its [`Dcel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub(crate) usize);

/// The position of a [`FaceRecord`] inside its [`Dcel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub(crate) usize);

/// A vertex of the planar subdivision.
#[derive(Debug)]
pub struct VertexRecord {
    /// The location of the vertex.
    pub coords: XY,
    /// Every half-edge leaving this vertex.
    pub incidents: Vec<HalfEdgeId>,
    /// Whether each operand explicitly placed this vertex.
    pub src: [bool; 2],
    /// Whether this vertex is a point-set member of each operand.
    pub in_set: [bool; 2],
    /// Where this vertex lies relative to each operand.
    pub locations: [Location; 2],
    /// Whether a downstream extraction has already consumed this vertex.
    pub extracted: bool,
}

/// One direction of an undirected edge of the planar subdivision.
#[derive(Debug)]
pub struct HalfEdgeRecord {
    /// The vertex this half-edge leaves from.
    pub origin: VertexId,
    /// The opposite-direction half-edge sharing the same curve.
    pub twin: HalfEdgeId,
    /// The half-edge following this one along the bounding cycle of the
    /// face on the left.
    pub next: HalfEdgeId,
    /// The half-edge preceding this one along the same cycle.
    pub prev: HalfEdgeId,
    /// The coordinate run from origin to destination. Interior coordinates
    /// are kept for geometric fidelity; none of them is a vertex of the
    /// subdivision.
    pub seq: Sequence,
    /// The face on the left of this half-edge. Populated by the overlay's
    /// face pass, never by the builder.
    pub incident: Option<FaceId>,
    /// Whether each operand explicitly placed this edge.
    pub src_edge: [bool; 2],
    /// Whether this edge borders an areal face of each operand.
    pub src_face: [bool; 2],
    /// Whether this edge is part of each operand's point set.
    pub in_set: [bool; 2],
    /// Whether a downstream extraction has already consumed this edge.
    pub extracted: bool,
}

/// A face of the planar subdivision. Faces are produced by the overlay's
/// face pass; the builder leaves the face arena empty.
#[derive(Debug)]
pub struct FaceRecord {
    /// Any half-edge on the bounding cycle of this face.
    pub cycle: HalfEdgeId,
    /// Whether this face is part of each operand's point set.
    pub in_set: [bool; 2],
    /// Whether a downstream extraction has already consumed this face.
    pub extracted: bool,
}

/// A doubly connected edge list: the planar subdivision induced by one or
/// two operand geometries.
///
/// Records live in flat arenas and reference each other through stable
/// index handles; the arena is the single owner of every record.
#[derive(Debug, Default)]
pub struct Dcel {
    vertices: Vec<VertexRecord>,
    by_coords: HashMap<XY, VertexId>,
    half_edges: Vec<HalfEdgeRecord>,
    faces: Vec<FaceRecord>,
}

impl Index<VertexId> for Dcel {
    type Output = VertexRecord;

    fn index(&self, id: VertexId) -> &VertexRecord {
        &self.vertices[id.0]
    }
}

impl IndexMut<VertexId> for Dcel {
    fn index_mut(&mut self, id: VertexId) -> &mut VertexRecord {
        &mut self.vertices[id.0]
    }
}

impl Index<HalfEdgeId> for Dcel {
    type Output = HalfEdgeRecord;

    fn index(&self, id: HalfEdgeId) -> &HalfEdgeRecord {
        &self.half_edges[id.0]
    }
}

impl IndexMut<HalfEdgeId> for Dcel {
    fn index_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdgeRecord {
        &mut self.half_edges[id.0]
    }
}

impl Index<FaceId> for Dcel {
    type Output = FaceRecord;

    fn index(&self, id: FaceId) -> &FaceRecord {
        &self.faces[id.0]
    }
}

impl IndexMut<FaceId> for Dcel {
    fn index_mut(&mut self, id: FaceId) -> &mut FaceRecord {
        &mut self.faces[id.0]
    }
}

impl Dcel {
    /// Returns a subdivision with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over all the vertices of the subdivision.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexRecord)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(position, record)| (VertexId(position), record))
    }

    /// Returns an iterator over all the half-edges of the subdivision, in
    /// insertion order.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeRecord)> {
        self.half_edges
            .iter()
            .enumerate()
            .map(|(position, record)| (HalfEdgeId(position), record))
    }

    /// Returns an iterator over all the faces of the subdivision.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceRecord)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(position, record)| (FaceId(position), record))
    }

    /// Returns the amount of vertices in the subdivision.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the amount of half-edges in the subdivision.
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// Returns the vertex at the given coordinate, if any.
    pub fn vertex_at(&self, xy: XY) -> Option<VertexId> {
        self.by_coords.get(&xy).copied()
    }

    /// Returns the vertex the given half-edge arrives at.
    pub fn destination(&self, edge: HalfEdgeId) -> VertexId {
        self[self[edge].twin].origin
    }

    /// Registers a face produced by the overlay's face pass.
    pub fn push_face(&mut self, face: FaceRecord) -> FaceId {
        let id = FaceId(self.faces.len());
        self.faces.push(face);
        id
    }

    pub(crate) fn push_vertex(&mut self, coords: XY) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexRecord {
            coords,
            incidents: Vec::new(),
            src: [false; 2],
            in_set: [false; 2],
            locations: [Location::default(); 2],
            extracted: false,
        });
        self.by_coords.insert(coords, id);
        id
    }

    /// Checks every structural invariant of the subdivision.
    ///
    /// A violation means a bug in this library, not in the caller's input;
    /// the returned error names the first broken invariant.
    pub fn validate(&self) -> Result<(), TopologyError> {
        for (id, edge) in self.half_edges() {
            let twin = &self[edge.twin];

            if twin.twin != id {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} is not the twin of its twin"
                )));
            }
            if edge.seq.len() < 2 {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} carries fewer than two coordinates"
                )));
            }
            if edge.seq.reversed() != twin.seq {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} and its twin disagree on their curve"
                )));
            }
            if edge.seq.first() != Some(self[edge.origin].coords) {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} does not start at its origin"
                )));
            }
            if self[edge.next].origin != self.destination(id) {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} does not chain onto its next"
                )));
            }

            // next and prev being mutually inverse makes next a permutation
            // of the half-edges, so every half-edge belongs to exactly one
            // closed cycle.
            if self[edge.next].prev != id || self[edge.prev].next != id {
                return Err(TopologyError::invariant(format!(
                    "half-edge {id:?} has inconsistent next/prev links"
                )));
            }

            for position in 1..edge.seq.len() - 1 {
                if self.vertex_at(edge.seq.get(position)).is_some() {
                    return Err(TopologyError::invariant(format!(
                        "half-edge {id:?} runs through a vertex at an interior coordinate"
                    )));
                }
            }
        }

        let mut listed = vec![false; self.half_edges.len()];
        for (id, vertex) in self.vertices() {
            for &edge in &vertex.incidents {
                if self[edge].origin != id {
                    return Err(TopologyError::invariant(format!(
                        "vertex {id:?} lists half-edge {edge:?} which does not leave from it"
                    )));
                }
                if std::mem::replace(&mut listed[edge.0], true) {
                    return Err(TopologyError::invariant(format!(
                        "half-edge {edge:?} is listed as incident more than once"
                    )));
                }
            }

            for location in vertex.locations {
                if location.boundary && location.interior {
                    return Err(TopologyError::invariant(format!(
                        "vertex {id:?} is both boundary and interior for one operand"
                    )));
                }
            }
        }
        if let Some(missing) = listed.iter().position(|&seen| !seen) {
            return Err(TopologyError::invariant(format!(
                "half-edge {:?} is not listed at its origin",
                HalfEdgeId(missing)
            )));
        }

        Ok(())
    }
}
