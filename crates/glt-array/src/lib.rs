//! Shape-tagged array containers for the glt utility layer.
//!
//! The original design managed rank-1/2/3 buffers as trees of raw
//! pointers with matching allocate/copy/free triples per element type.
//! Here each array is one exclusively-owned value: a flat buffer plus
//! explicit per-rank dimension metadata ([`Shape`]). Allocation and
//! initialization are a single constructor, deep free is `Drop`, and
//! deep copy checks shapes instead of trusting the caller — the
//! double-free and shape-mismatch hazards of the pointer-tree design
//! are unrepresentable.
//!
//! Rectangularity is an invariant of the representation: a flat buffer
//! cannot be jagged.
//!
//! Element types are whatever `Clone` allows; the designated
//! character-buffer case has its own fixed-width types
//! ([`CharBuf`], [`CharGrid`]) with truncate-and-zero-pad
//! initialization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chars;
pub mod ndarray;
pub mod shape;

pub use chars::{CharBuf, CharGrid};
pub use ndarray::NdArray;
pub use shape::Shape;
