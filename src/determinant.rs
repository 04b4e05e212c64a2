use num_traits::Num;

use crate::xy::XY;

/// The scalar value representing the determinant of a matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Determinant<T>(T);

impl From<[&XY; 3]> for Determinant<f64> {
    /// Being `A`, `B` and `C` the given coordinates, returns the determinant
    /// of the matrix representing the direction vectors `AB` and `AC`.
    fn from([a, b, c]: [&XY; 3]) -> Self {
        Self((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }
}

impl<T> Determinant<T> {
    /// Returns the inner value of self.
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Determinant<T>
where
    T: Num + PartialOrd,
{
    /// Returns the [`Orientation`] encoded by the sign of self.
    pub(crate) fn orientation(self) -> Orientation {
        if self.0 > T::zero() {
            Orientation::LeftTurn
        } else if self.0 < T::zero() {
            Orientation::RightTurn
        } else {
            Orientation::Collinear
        }
    }
}

/// The turn taken at `b` when walking `a -> b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The walk turns counter-clockwise at `b`.
    LeftTurn,
    /// The walk turns clockwise at `b`.
    RightTurn,
    /// The three points lie on a single straight line.
    Collinear,
}

/// Returns the [`Orientation`] of the three given coordinates.
///
/// The classification is strict: only an exactly zero cross product is
/// collinear.
pub fn orientation(a: XY, b: XY, c: XY) -> Orientation {
    Determinant::from([&a, &b, &c]).orientation()
}
