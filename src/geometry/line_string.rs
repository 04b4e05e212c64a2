use crate::sequence::Sequence;
use crate::xy::XY;

/// A curve of straight segments between consecutive coordinates.
///
/// A line string is either empty or holds at least two coordinates, with no
/// coordinate repeated consecutively. Constructors trust the caller on both
/// counts; ingestion is responsible for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineString {
    seq: Sequence,
}

impl From<Sequence> for LineString {
    fn from(seq: Sequence) -> Self {
        Self { seq }
    }
}

impl LineString {
    /// Returns the line string over the given coordinates.
    pub fn new(seq: Sequence) -> Self {
        seq.into()
    }

    /// Returns the coordinates the line string is made of.
    pub fn coordinates(&self) -> &Sequence {
        &self.seq
    }

    /// Returns true if, and only if, the line string has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns true if, and only if, the line string ends at the coordinate
    /// it starts from.
    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }

    /// Returns the first coordinate of the line string, if any.
    pub fn start_point(&self) -> Option<XY> {
        self.seq.first()
    }

    /// Returns the last coordinate of the line string, if any.
    pub fn end_point(&self) -> Option<XY> {
        self.seq.last()
    }

    /// Returns self as a [`MultiLineString`] of one.
    pub fn to_multi_line_string(&self) -> MultiLineString {
        MultiLineString::from(vec![self.clone()])
    }
}

/// A collection of [`LineString`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(line_strings: Vec<LineString>) -> Self {
        Self { line_strings }
    }
}

impl MultiLineString {
    /// Returns the collection with no line strings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the line strings in the collection.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Returns true if, and only if, every line string in the collection is
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.line_strings.iter().all(LineString::is_empty)
    }
}
