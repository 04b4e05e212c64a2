use crate::dcel::edge_set::EdgeSet;
use crate::dcel::{Dcel, HalfEdgeId, HalfEdgeRecord, Operand, VertexId};
use crate::geometry::{Geometry, MultiLineString, MultiPoint, MultiPolygon};
use crate::interaction::InteractionSet;
use crate::sequence::Sequence;
use crate::xy::XY;

impl Dcel {
    /// Returns the subdivision induced by the given geometry and its ghost
    /// lines, tagged as the given operand.
    ///
    /// The interaction set must be consistent with the geometry: every
    /// linear element starts and ends at an interaction point, and the
    /// inputs are mutually noded. Both are caller promises; a broken one is
    /// fatal.
    pub fn from_geometry(
        geometry: &Geometry,
        ghosts: &MultiLineString,
        operand: Operand,
        interactions: &InteractionSet,
    ) -> Dcel {
        let mut dcel = Dcel::new();
        dcel.merge_geometry(geometry, ghosts, operand, interactions);
        dcel
    }

    /// Adds another operand's geometry and ghost lines to the subdivision,
    /// in place.
    ///
    /// Additions are sequential: one operand must be fully merged before
    /// the next begins. The interaction set is shared by all operands of
    /// one overlay.
    pub fn merge_geometry(
        &mut self,
        geometry: &Geometry,
        ghosts: &MultiLineString,
        operand: Operand,
        interactions: &InteractionSet,
    ) {
        self.add_geometry(geometry, operand, interactions);
        self.add_ghosts(ghosts, interactions);

        log::debug!(
            "merged operand {operand:?}: {} vertices, {} half-edges",
            self.num_vertices(),
            self.num_half_edges(),
        );
    }

    fn add_geometry(
        &mut self,
        geometry: &Geometry,
        operand: Operand,
        interactions: &InteractionSet,
    ) {
        match geometry {
            Geometry::Polygon(polygon) => {
                self.add_multi_polygon(&polygon.to_multi_polygon(), operand, interactions)
            }
            Geometry::MultiPolygon(multi_polygon) => {
                self.add_multi_polygon(multi_polygon, operand, interactions)
            }
            Geometry::LineString(line_string) => self.add_multi_line_string(
                &line_string.to_multi_line_string(),
                operand,
                interactions,
            ),
            Geometry::MultiLineString(multi_line_string) => {
                self.add_multi_line_string(multi_line_string, operand, interactions)
            }
            Geometry::Point(point) => self.add_multi_point(&point.to_multi_point(), operand),
            Geometry::MultiPoint(multi_point) => self.add_multi_point(multi_point, operand),
            Geometry::GeometryCollection(collection) => {
                for child in collection.geometries() {
                    self.add_geometry(child, operand, interactions);
                }
            }
        }
    }

    fn add_multi_polygon(
        &mut self,
        multi_polygon: &MultiPolygon,
        operand: Operand,
        interactions: &InteractionSet,
    ) {
        let multi_polygon = multi_polygon.force_ccw();
        let op = operand.index();

        for polygon in multi_polygon.polygons() {
            // Rings only ever place boundary vertices; an already known
            // vertex keeps whatever the earlier placement recorded.
            for ring in polygon.rings() {
                for xy in ring.iter() {
                    if !interactions.contains(&xy) || self.vertex_at(xy).is_some() {
                        continue;
                    }
                    let vertex = self.push_vertex(xy);
                    self[vertex].src[op] = true;
                    self[vertex].locations[op].boundary = true;
                }
            }

            for ring in polygon.rings() {
                let mut pairs: Vec<(HalfEdgeId, HalfEdgeId)> = Vec::new();
                for segment in non_interacting_segments(ring, interactions) {
                    let reverse = segment.reversed();
                    let origin = self.expect_vertex(segment.get(0));
                    let destination = self.expect_vertex(reverse.get(0));

                    // After CCW forcing the ring's interior lies on the left
                    // of the forward run, so only the internal half-edge
                    // borders the operand's face.
                    let (internal, external) =
                        self.push_twin_pair(origin, destination, segment, reverse);
                    self[internal].src_edge[op] = true;
                    self[internal].src_face[op] = true;
                    self[external].src_edge[op] = true;
                    pairs.push((internal, external));
                }

                // Following next traces the ring forward along the internal
                // cycle and backwards along the external one.
                for (position, &(internal, external)) in pairs.iter().enumerate() {
                    let (next_internal, next_external) = pairs[(position + 1) % pairs.len()];
                    self[internal].next = next_internal;
                    self[next_internal].prev = internal;
                    self[next_external].next = external;
                    self[external].prev = next_external;
                }
            }
        }
    }

    fn add_multi_line_string(
        &mut self,
        multi_line_string: &MultiLineString,
        operand: Operand,
        interactions: &InteractionSet,
    ) {
        let op = operand.index();

        // Vertex pass.
        for line_string in multi_line_string.line_strings() {
            let seq = line_string.coordinates();
            let n = seq.len();
            for position in 0..n {
                let xy = seq.get(position);
                if !interactions.contains(&xy) {
                    continue;
                }

                let on_boundary =
                    (position == 0 || position == n - 1) && !line_string.is_closed();
                match self.vertex_at(xy) {
                    None => {
                        let vertex = self.push_vertex(xy);
                        self[vertex].src[op] = true;
                        if on_boundary {
                            self[vertex].locations[op].boundary = true;
                        } else {
                            self[vertex].locations[op].interior = true;
                        }
                    }
                    Some(vertex) => {
                        let location = &mut self[vertex].locations[op];
                        if on_boundary {
                            if location.boundary {
                                // Mod-2 rule: a boundary passing through the
                                // point an even number of times makes it an
                                // interior point.
                                location.boundary = false;
                                location.interior = true;
                            } else {
                                location.boundary = true;
                                location.interior = false;
                            }
                        } else {
                            location.interior = true;
                        }
                    }
                }
            }
        }

        // Edge pass. Identical runs contributed by overlapping lines are
        // added once.
        let mut edges = EdgeSet::default();
        for line_string in multi_line_string.line_strings() {
            for segment in non_interacting_segments(line_string.coordinates(), interactions) {
                let reverse = segment.reversed();
                if edges.contains(&segment) {
                    continue;
                }
                edges.insert(segment.clone());
                edges.insert(reverse.clone());

                let origin = self.expect_vertex(segment.get(0));
                let destination = self.expect_vertex(reverse.get(0));

                // A free-standing line bounds no face; the pair stays a
                // degenerate two-edge cycle.
                let (forward, backward) =
                    self.push_twin_pair(origin, destination, segment, reverse);
                self[forward].src_edge[op] = true;
                self[backward].src_edge[op] = true;
            }
        }
    }

    fn add_multi_point(&mut self, multi_point: &MultiPoint, operand: Operand) {
        let op = operand.index();
        for point in multi_point.points() {
            let Some(xy) = point.xy() else {
                continue;
            };
            let vertex = match self.vertex_at(xy) {
                Some(vertex) => vertex,
                None => self.push_vertex(xy),
            };
            self[vertex].src[op] = true;
            self[vertex].locations[op].interior = true;
        }
    }

    /// Stitches the ghost lines into the subdivision so the eventual
    /// overlay graph is a single connected component.
    ///
    /// Ghosts carry no source flags: they exist only to connect, never to
    /// contribute to either operand's point set.
    fn add_ghosts(&mut self, ghosts: &MultiLineString, interactions: &InteractionSet) {
        let mut edges = EdgeSet::default();
        for (_, half_edge) in self.half_edges() {
            edges.insert(half_edge.seq.clone());
        }

        for line_string in ghosts.line_strings() {
            for segment in non_interacting_segments(line_string.coordinates(), interactions) {
                let reverse = segment.reversed();
                let start = segment.get(0);
                let end = reverse.get(0);

                if self.vertex_at(start).is_none() {
                    self.push_vertex(start);
                }
                if self.vertex_at(end).is_none() {
                    self.push_vertex(end);
                }

                if edges.contains(&segment) {
                    // The run already exists as a real edge; the graph is
                    // connected there without the ghost.
                    continue;
                }
                edges.insert(segment.clone());
                edges.insert(reverse.clone());

                self.add_ghost_line(segment, reverse);
            }
        }
    }

    fn add_ghost_line(&mut self, segment: Sequence, reverse: Sequence) {
        let origin = self.expect_vertex(segment.get(0));
        let destination = self.expect_vertex(reverse.get(0));
        log::trace!(
            "ghost segment stitched between {:?} and {:?}",
            self[origin].coords,
            self[destination].coords,
        );

        self.push_twin_pair(origin, destination, segment, reverse);

        self.fix_vertex(origin);
        self.fix_vertex(destination);
    }

    /// Rewires next/prev around the given vertex so that the cyclic order
    /// of its incidences realises the planar embedding.
    ///
    /// Outgoing half-edges are ordered by the bearing of their first
    /// interior coordinate as seen from the vertex; for cyclically
    /// consecutive outgoing edges `e`, `f` in counter-clockwise order,
    /// `e.prev = f.twin` and `f.twin.next = e`. At a vertex incident to a
    /// single ring this reproduces the ring wiring exactly.
    fn fix_vertex(&mut self, vertex: VertexId) {
        let origin = self[vertex].coords;
        let mut incidents = std::mem::take(&mut self[vertex].incidents);

        incidents.sort_by(|&a, &b| {
            let bearing_a = origin.bearing_to(&self[a].seq.get(1));
            let bearing_b = origin.bearing_to(&self[b].seq.get(1));
            bearing_a
                .partial_cmp(&bearing_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (position, &edge) in incidents.iter().enumerate() {
            let following = incidents[(position + 1) % incidents.len()];
            let following_twin = self[following].twin;
            self[edge].prev = following_twin;
            self[following_twin].next = edge;
        }

        self[vertex].incidents = incidents;
    }

    /// Allocates a twin pair of half-edges over the given curve, as a
    /// degenerate two-edge cycle registered at both endpoints.
    fn push_twin_pair(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        segment: Sequence,
        reverse: Sequence,
    ) -> (HalfEdgeId, HalfEdgeId) {
        let forward = HalfEdgeId(self.half_edges.len());
        let backward = HalfEdgeId(self.half_edges.len() + 1);

        self.half_edges.push(HalfEdgeRecord {
            origin,
            twin: backward,
            next: backward,
            prev: backward,
            seq: segment,
            incident: None,
            src_edge: [false; 2],
            src_face: [false; 2],
            in_set: [false; 2],
            extracted: false,
        });
        self.half_edges.push(HalfEdgeRecord {
            origin: destination,
            twin: forward,
            next: forward,
            prev: forward,
            seq: reverse,
            incident: None,
            src_edge: [false; 2],
            src_face: [false; 2],
            in_set: [false; 2],
            extracted: false,
        });

        self[origin].incidents.push(forward);
        self[destination].incidents.push(backward);

        (forward, backward)
    }

    fn expect_vertex(&self, xy: XY) -> VertexId {
        self.vertex_at(xy).unwrap_or_else(|| {
            panic!("interaction set promised a vertex at ({}, {})", xy.x, xy.y)
        })
    }
}

/// Splits the given coordinate run into maximal segments whose interior
/// coordinates are free of interaction points. Every yielded segment starts
/// and ends at an interaction point.
fn non_interacting_segments<'a>(
    seq: &'a Sequence,
    interactions: &'a InteractionSet,
) -> NonInteractingSegments<'a> {
    NonInteractingSegments {
        seq,
        interactions,
        position: 0,
    }
}

struct NonInteractingSegments<'a> {
    seq: &'a Sequence,
    interactions: &'a InteractionSet,
    position: usize,
}

impl Iterator for NonInteractingSegments<'_> {
    type Item = Sequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position + 1 >= self.seq.len() {
            return None;
        }

        let start = self.position;
        let end = (start + 1..self.seq.len())
            .find(|&position| self.interactions.contains(&self.seq.get(position)))
            .expect("every linear element must terminate at an interaction point");

        self.position = end;
        Some(self.seq.slice(start, end + 1))
    }
}
