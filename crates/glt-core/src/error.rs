//! Error types for the glt utility layer.
//!
//! Two policies coexist and are kept distinct on purpose:
//!
//! - **Fatal-by-policy** conditions ([`NumericError::NanProbability`])
//!   are unrecoverable data errors. Library code surfaces them as
//!   `Err`; binary-level callers print the diagnostic and terminate.
//! - **Structural** conditions ([`ShapeError`]) replace what the
//!   original design left as undefined behavior (shape mismatch on
//!   copy, out-of-range access) with explicit results.
//!
//! Malformed tokens during typed splitting are deliberately NOT errors;
//! that filtering policy lives in `glt-text` as a named outcome.

use std::error::Error;
use std::fmt;

/// Unrecoverable numeric data errors.
///
/// These correspond to conditions the original tool reported through
/// its fatal-error collaborator before exiting. Callers at the binary
/// boundary are expected to treat them the same way; library code and
/// tests handle them as ordinary `Result`s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericError {
    /// A NaN was observed where a probability was required.
    NanProbability {
        /// Where the NaN was observed (function or field name).
        context: String,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NanProbability { context } => {
                write!(f, "[{context}] value is NaN")
            }
        }
    }
}

impl Error for NumericError {}

/// Errors from shape-tagged array construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A dimension of zero was requested.
    ZeroDim {
        /// Axis (0-based) carrying the zero dimension.
        axis: usize,
    },
    /// Two arrays were expected to have the same rank.
    RankMismatch {
        /// Rank of the destination.
        expected: usize,
        /// Rank of the source.
        actual: usize,
    },
    /// Two arrays were expected to have identical dimensions.
    ShapeMismatch {
        /// Dimensions of the destination.
        expected: Vec<usize>,
        /// Dimensions of the source.
        actual: Vec<usize>,
    },
    /// A per-axis index was outside the array's dimensions.
    IndexOutOfBounds {
        /// Axis on which the index overran.
        axis: usize,
        /// The offending index.
        index: usize,
        /// The dimension on that axis.
        dim: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDim { axis } => {
                write!(f, "dimension on axis {axis} must be at least 1")
            }
            Self::RankMismatch { expected, actual } => {
                write!(f, "rank mismatch: expected {expected}, got {actual}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected:?}, got {actual:?}")
            }
            Self::IndexOutOfBounds { axis, index, dim } => {
                write!(f, "index {index} out of bounds on axis {axis} (dim {dim})")
            }
        }
    }
}

impl Error for ShapeError {}
