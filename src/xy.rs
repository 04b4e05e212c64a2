use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a coordinate in the plane.
///
/// Equality and hashing are bitwise on the coordinate representation: two
/// coordinates with different bit patterns are different vertices, no matter
/// how numerically close they are. The total order is lexicographic, first by
/// x and then by y.
#[derive(Debug, Clone, Copy)]
pub struct XY {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl PartialEq for XY {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for XY {}

impl Hash for XY {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialOrd for XY {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for XY {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<[f64; 2]> for XY {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl XY {
    /// Returns the coordinate with the given components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the bearing of the other coordinate as seen from self, as a
    /// full-turn angle in `(-pi, pi]`.
    pub(crate) fn bearing_to(&self, other: &XY) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

#[macro_export]
macro_rules! xy {
    ($x:expr, $y:expr) => {
        $crate::XY { x: $x, y: $y }
    };
}

pub use xy;
