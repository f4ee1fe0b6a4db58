//! The generic shape-tagged array container.

use glt_core::ShapeError;

use crate::shape::Shape;

/// A rank-1/2/3 rectangular array over a flat, exclusively-owned buffer.
///
/// Replaces the original allocate/copy/free triples: construction via
/// [`NdArray::filled`] leaves no element uninitialized, deep free is
/// `Drop`, and [`NdArray::copy_from`] refuses mismatched shapes instead
/// of reading out of bounds. Storage is row-major with the leading axis
/// outermost.
#[derive(Clone, Debug, PartialEq)]
pub struct NdArray<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Clone> NdArray<T> {
    /// Allocate the requested shape with every element set to `fill`.
    pub fn filled(shape: Shape, fill: T) -> Self {
        let data = vec![fill; shape.len()];
        Self { shape, data }
    }

    /// Element-wise copy from `src` into `self`.
    ///
    /// Shapes must match exactly; on mismatch returns
    /// [`ShapeError::ShapeMismatch`] and leaves `self` untouched.
    pub fn copy_from(&mut self, src: &NdArray<T>) -> Result<(), ShapeError> {
        if self.shape != src.shape {
            return Err(ShapeError::ShapeMismatch {
                expected: self.shape.dims().to_vec(),
                actual: src.shape.dims().to_vec(),
            });
        }
        self.data.clone_from_slice(&src.data);
        Ok(())
    }

    /// Overwrite every element with `fill`.
    pub fn fill(&mut self, fill: T) {
        for slot in self.data.iter_mut() {
            *slot = fill.clone();
        }
    }
}

impl<T> NdArray<T> {
    /// The array's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Shared reference to the element at a per-axis index.
    pub fn get(&self, index: &[usize]) -> Result<&T, ShapeError> {
        let offset = self.shape.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to the element at a per-axis index.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T, ShapeError> {
        let offset = self.shape.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// The contiguous block at index `i` of the leading axis: one
    /// element for rank 1, a row for rank 2, a plane for rank 3.
    pub fn axis0(&self, i: usize) -> Result<&[T], ShapeError> {
        let dim = self.shape.dims()[0];
        if i >= dim {
            return Err(ShapeError::IndexOutOfBounds { axis: 0, index: i, dim });
        }
        let stride = self.shape.stride0();
        Ok(&self.data[i * stride..(i + 1) * stride])
    }

    /// Mutable variant of [`NdArray::axis0`].
    pub fn axis0_mut(&mut self, i: usize) -> Result<&mut [T], ShapeError> {
        let dim = self.shape.dims()[0];
        if i >= dim {
            return Err(ShapeError::IndexOutOfBounds { axis: 0, index: i, dim });
        }
        let stride = self.shape.stride0();
        Ok(&mut self.data[i * stride..(i + 1) * stride])
    }

    /// The whole buffer as one flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable variant of [`NdArray::as_slice`].
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn filled_defines_every_element() {
        let arr = NdArray::filled(Shape::rank3(2, 3, 4).unwrap(), 7u64);
        assert_eq!(arr.as_slice().len(), 24);
        assert!(arr.as_slice().iter().all(|&v| v == 7));
    }

    #[test]
    fn get_and_get_mut_agree_on_layout() {
        let mut arr = NdArray::filled(Shape::rank2(2, 3).unwrap(), 0.0f64);
        *arr.get_mut(&[1, 2]).unwrap() = 9.5;
        assert_eq!(*arr.get(&[1, 2]).unwrap(), 9.5);
        // Row-major: [1, 2] is the last slot.
        assert_eq!(arr.as_slice()[5], 9.5);
    }

    #[test]
    fn get_rejects_wrong_rank() {
        let arr = NdArray::filled(Shape::rank2(2, 3).unwrap(), 0u32);
        assert!(matches!(
            arr.get(&[1, 1, 1]),
            Err(ShapeError::RankMismatch { .. })
        ));
    }

    #[test]
    fn copy_from_matching_shape() {
        let src = NdArray::filled(Shape::rank2(2, 3).unwrap(), 5.0f64);
        let mut dst = NdArray::filled(Shape::rank2(2, 3).unwrap(), 0.0f64);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn copy_from_mismatched_shape_leaves_destination_untouched() {
        let src = NdArray::filled(Shape::rank2(3, 2).unwrap(), 5.0f64);
        let mut dst = NdArray::filled(Shape::rank2(2, 3).unwrap(), 1.0f64);
        let err = dst.copy_from(&src).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ShapeMismatch {
                expected: vec![2, 3],
                actual: vec![3, 2],
            }
        );
        assert!(dst.as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn copy_from_rejects_rank_difference() {
        let src = NdArray::filled(Shape::rank1(6).unwrap(), 5.0f64);
        let mut dst = NdArray::filled(Shape::rank2(2, 3).unwrap(), 1.0f64);
        assert!(dst.copy_from(&src).is_err());
    }

    #[test]
    fn axis0_views_are_disjoint_blocks() {
        let mut arr = NdArray::filled(Shape::rank3(2, 2, 2).unwrap(), 0u32);
        arr.axis0_mut(1).unwrap().fill(9);
        assert!(arr.axis0(0).unwrap().iter().all(|&v| v == 0));
        assert!(arr.axis0(1).unwrap().iter().all(|&v| v == 9));
    }

    #[test]
    fn axis0_out_of_range() {
        let arr = NdArray::filled(Shape::rank1(3).unwrap(), 0u32);
        assert!(matches!(
            arr.axis0(3),
            Err(ShapeError::IndexOutOfBounds { axis: 0, .. })
        ));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut arr = NdArray::filled(Shape::rank1(4).unwrap(), 1u64);
        arr.fill(8);
        assert!(arr.as_slice().iter().all(|&v| v == 8));
    }

    proptest! {
        #[test]
        fn filled_holds_fill_value_for_arbitrary_shapes(
            a in 1usize..8,
            b in 1usize..8,
            c in 1usize..8,
            fill in -1e6f64..1e6,
        ) {
            let arr = NdArray::filled(Shape::rank3(a, b, c).unwrap(), fill);
            prop_assert_eq!(arr.as_slice().len(), a * b * c);
            prop_assert!(arr.as_slice().iter().all(|&v| v == fill));
        }

        #[test]
        fn copy_roundtrip_preserves_elements(
            a in 1usize..6,
            b in 1usize..6,
            fill in -1e6f64..1e6,
        ) {
            let mut src = NdArray::filled(Shape::rank2(a, b).unwrap(), 0.0f64);
            for (i, slot) in src.as_mut_slice().iter_mut().enumerate() {
                *slot = fill + i as f64;
            }
            let mut dst = NdArray::filled(Shape::rank2(a, b).unwrap(), 0.0f64);
            dst.copy_from(&src).unwrap();
            prop_assert_eq!(dst.as_slice(), src.as_slice());
        }
    }
}
