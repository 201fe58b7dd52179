//! Error types for grid access and search.

use std::error::Error;
use std::fmt;

/// Errors raised by grid accessors and solvers.
///
/// An unreachable goal is not an error: solvers return an empty path for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A cell index lies outside `[0, width * height)`.
    OutOfBounds {
        /// The offending index.
        idx: usize,
        /// Number of cells in the grid.
        size: usize,
    },
    /// A raw direction value does not name one of the eight directions.
    UnknownDirection(u8),
    /// An unweighted search exceeded its iteration budget.
    SearchAborted {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },
    /// A cost vector does not match the requested grid dimensions.
    DimensionMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied cost vector.
        actual: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { idx, size } => {
                write!(f, "({idx}) out of bounds for grid of {size} cells")
            }
            Self::UnknownDirection(raw) => write!(f, "unknown direction ({raw})"),
            Self::SearchAborted { iterations } => {
                write!(f, "search aborted after {iterations} iterations")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} cell costs, got {actual}")
            }
        }
    }
}

impl Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_index() {
        let err = SearchError::OutOfBounds { idx: 12, size: 4 };
        assert_eq!(err.to_string(), "(12) out of bounds for grid of 4 cells");
        assert_eq!(
            SearchError::UnknownDirection(9).to_string(),
            "unknown direction (9)"
        );
    }
}
