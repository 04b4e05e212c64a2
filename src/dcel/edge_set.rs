use std::collections::HashSet;

use crate::sequence::Sequence;

/// A content-addressed set of segment curves, keyed by the full coordinate
/// run from start to end.
///
/// Callers pair every insertion with the reversed run, so that an
/// undirected segment is registered in both directions and never added to
/// the subdivision twice.
#[derive(Debug, Default)]
pub(super) struct EdgeSet {
    segments: HashSet<Sequence>,
}

impl EdgeSet {
    /// Returns true if, and only if, the exact coordinate run is present.
    pub(super) fn contains(&self, segment: &Sequence) -> bool {
        self.segments.contains(segment)
    }

    /// Records the given coordinate run.
    pub(super) fn insert(&mut self, segment: Sequence) {
        self.segments.insert(segment);
    }
}
