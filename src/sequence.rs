use std::cmp::Ordering;

use crate::determinant::Determinant;
use crate::xy::XY;

/// An ordered run of coordinates in the plane.
///
/// A sequence is content-addressed: two sequences are equal when they hold
/// the same coordinates in the same order, bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    coords: Vec<XY>,
}

impl From<Vec<XY>> for Sequence {
    fn from(coords: Vec<XY>) -> Self {
        Self { coords }
    }
}

impl From<Vec<[f64; 2]>> for Sequence {
    fn from(coords: Vec<[f64; 2]>) -> Self {
        coords.into_iter().map(XY::from).collect()
    }
}

impl FromIterator<XY> for Sequence {
    fn from_iter<I: IntoIterator<Item = XY>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

impl Sequence {
    /// Returns the amount of coordinates in the sequence.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if, and only if, the sequence has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the coordinate at the given position.
    ///
    /// Panics when the position is out of bounds, just like slice indexing.
    pub fn get(&self, position: usize) -> XY {
        self.coords[position]
    }

    /// Returns the first coordinate of the sequence, if any.
    pub fn first(&self) -> Option<XY> {
        self.coords.first().copied()
    }

    /// Returns the last coordinate of the sequence, if any.
    pub fn last(&self) -> Option<XY> {
        self.coords.last().copied()
    }

    /// Returns an ordered iterator over all the coordinates of the sequence.
    pub fn iter(&self) -> impl Iterator<Item = XY> + '_ {
        self.coords.iter().copied()
    }

    /// Returns the half-open sub-sequence `[from, to)` as an owned sequence.
    pub fn slice(&self, from: usize, to: usize) -> Sequence {
        Self {
            coords: self.coords[from..to].to_vec(),
        }
    }

    /// Returns an equivalent sequence with the coordinates in reverse order.
    pub fn reversed(&self) -> Sequence {
        Self {
            coords: self.coords.iter().rev().copied().collect(),
        }
    }

    /// Returns true if, and only if, the sequence holds at least two
    /// coordinates and the last one equals the first.
    pub fn is_closed(&self) -> bool {
        self.coords.len() >= 2 && self.coords.first() == self.coords.last()
    }

    /// Returns true if, and only if, self is a clockwise ring.
    ///
    /// Self must be closed; the duplicate closing coordinate is not a vertex
    /// of its own. The orientation is read off the turn taken at the lowest
    /// (then rightmost) vertex, which is guaranteed to be convex.
    pub(crate) fn is_clockwise(&self) -> bool {
        let vertices = &self.coords[..self.coords.len().saturating_sub(1)];

        vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                match a.y.partial_cmp(&b.y) {
                    Some(Ordering::Equal) => b.x.partial_cmp(&a.x),
                    other => other,
                }
                .unwrap_or(Ordering::Equal)
            })
            .map(|(mut position, lowest)| {
                // Avoids usize overflow when position = 0.
                position += vertices.len();

                Determinant::from([
                    &vertices[(position - 1) % vertices.len()],
                    lowest,
                    &vertices[(position + 1) % vertices.len()],
                ])
                .into_inner()
                < 0.
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::xy::{XY, xy};

    #[test]
    fn sequence_slicing_and_reversal() {
        let seq = Sequence::from(vec![[0., 0.], [1., 0.], [2., 1.], [3., 1.]]);

        assert_eq!(
            seq.slice(1, 3),
            Sequence::from(vec![[1., 0.], [2., 1.]]),
            "slice must be half-open",
        );
        assert_eq!(
            seq.reversed(),
            Sequence::from(vec![[3., 1.], [2., 1.], [1., 0.], [0., 0.]]),
        );
        assert_eq!(seq.reversed().reversed(), seq);
    }

    #[test]
    fn ring_orientation() {
        struct Test {
            name: &'static str,
            ring: Sequence,
            want: bool,
        }

        vec![
            Test {
                name: "counter-clockwise square",
                ring: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.], [0., 0.]].into(),
                want: false,
            },
            Test {
                name: "clockwise square",
                ring: vec![[0., 0.], [0., 4.], [4., 4.], [4., 0.], [0., 0.]].into(),
                want: true,
            },
            Test {
                name: "counter-clockwise triangle with collinear bottom",
                ring: vec![[0., 0.], [2., 0.], [4., 0.], [4., 4.], [0., 0.]].into(),
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.ring.is_clockwise();
            assert_eq!(
                got, test.want,
                "{}: got is clockwise = {got}, want = {}",
                test.name, test.want
            );
        });
    }

    #[test]
    fn closedness() {
        assert!(Sequence::from(vec![[0., 0.], [1., 1.], [0., 0.]]).is_closed());
        assert!(!Sequence::from(vec![[0., 0.], [1., 1.]]).is_closed());
        assert!(!Sequence::from(Vec::<XY>::new()).is_closed());
        assert!(
            !Sequence::from(vec![xy!(0., 0.), xy!(-0., 0.)]).is_closed(),
            "closedness is bitwise, negative zero does not close a ring",
        );
    }
}
