//! Error types for building a walker.
//!
//! The walk itself never fails: getting stuck is a terminal status, not an
//! error. Everything here is a rejected input caught before a grid exists.

/// Errors raised while validating walker parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    /// Grid edge length must be at least 1.
    #[error("invalid grid size {0}: edge length must be at least 1")]
    InvalidSize(usize),

    /// `size * size` does not fit in `usize`.
    #[error("grid size {0} is too large: cell count overflows")]
    SizeOverflow(usize),

    /// The grid would hold more cells than a walker is allowed to allocate.
    #[error("grid size {size} is too large: more than {max} cells")]
    TooManyCells { size: usize, max: usize },

    /// The frame throttle needs a positive threshold.
    #[error("invalid pacing: frames per step must be at least 1")]
    InvalidPacing,

    /// A fixed-width boundary rule needs a positive column width.
    #[error("invalid column width {0}: must be at least 1")]
    InvalidColumnWidth(usize),
}
