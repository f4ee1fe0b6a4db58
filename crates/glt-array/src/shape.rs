//! Per-rank dimension metadata.

use glt_core::ShapeError;
use smallvec::SmallVec;

/// Dimensions of a rank-1, -2, or -3 array.
///
/// Backed by a `SmallVec` sized for the maximum rank, so shapes never
/// heap-allocate. Every dimension is at least 1; zero dimensions are
/// rejected at construction with [`ShapeError::ZeroDim`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    dims: SmallVec<[usize; 3]>,
}

impl Shape {
    /// Rank-1 shape of `a` elements.
    pub fn rank1(a: usize) -> Result<Self, ShapeError> {
        Self::from_dims(&[a])
    }

    /// Rank-2 shape of `a × b` elements.
    pub fn rank2(a: usize, b: usize) -> Result<Self, ShapeError> {
        Self::from_dims(&[a, b])
    }

    /// Rank-3 shape of `a × b × c` elements.
    pub fn rank3(a: usize, b: usize, c: usize) -> Result<Self, ShapeError> {
        Self::from_dims(&[a, b, c])
    }

    fn from_dims(dims: &[usize]) -> Result<Self, ShapeError> {
        for (axis, &dim) in dims.iter().enumerate() {
            if dim == 0 {
                return Err(ShapeError::ZeroDim { axis });
            }
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
        })
    }

    /// The rank (1, 2, or 3).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The per-axis dimensions, leading axis first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of scalar elements.
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    /// Whether the shape holds zero elements. Always false: zero
    /// dimensions are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of scalar elements in one slice along the leading axis.
    pub fn stride0(&self) -> usize {
        self.dims[1..].iter().product()
    }

    /// Flat offset of a per-axis index, or an error naming the first
    /// axis that is out of range (or a rank mismatch).
    pub fn offset(&self, index: &[usize]) -> Result<usize, ShapeError> {
        if index.len() != self.rank() {
            return Err(ShapeError::RankMismatch {
                expected: self.rank(),
                actual: index.len(),
            });
        }
        let mut offset = 0;
        for (axis, (&i, &dim)) in index.iter().zip(self.dims.iter()).enumerate() {
            if i >= dim {
                return Err(ShapeError::IndexOutOfBounds {
                    axis,
                    index: i,
                    dim,
                });
            }
            offset = offset * dim + i;
        }
        Ok(offset)
    }
}
