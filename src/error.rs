use thiserror::Error;

/// Errors surfaced by the planar-subdivision core.
///
/// Both kinds report a broken contract rather than a recoverable condition:
/// [`TopologyError::UnsupportedGeometry`] asks the caller to flatten its
/// input, while [`TopologyError::InvariantViolation`] indicates a bug in
/// this library.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Interaction finding works over flat geometry lists; collections must
    /// be flattened by the caller beforehand.
    #[error("geometry collections must be flattened before interaction finding")]
    UnsupportedGeometry,

    /// A built structure failed self-validation.
    #[error("planar subdivision invariant broken: {detail}")]
    InvariantViolation {
        /// The invariant that failed, and where.
        detail: String,
    },
}

impl TopologyError {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            detail: detail.into(),
        }
    }
}
