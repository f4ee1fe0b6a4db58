//! glt: numeric, array, and text utilities for genotype-likelihood
//! analysis tools.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all glt sub-crates. For most users, adding `glt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glt::prelude::*;
//!
//! // Parse one row of per-genotype log-likelihoods, dropping the odd
//! // malformed column.
//! let mut likes = split_doubles("-0.92,-1.17,noise,-2.53", ",");
//! assert_eq!(likes.len(), 3);
//!
//! // Aggregate in log space without underflow, then call the genotype.
//! let total = logsum(&likes);
//! assert!(total.is_finite());
//! hard_call(&mut likes, false);
//! assert_eq!(likes, [1.0, 0.0, 0.0]);
//!
//! // Stage per-site buffers as one owned, shape-checked value.
//! let sites = NdArray::filled(Shape::rank2(4, 3).unwrap(), 0.0f64);
//! assert_eq!(sites.as_slice().len(), 12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`numeric`] | `glt-numeric` | Log-sum-exp, clamping, arg-max, hard calling, seeded draws |
//! | [`array`] | `glt-array` | Shape-tagged rank-1/2/3 containers and character buffers |
//! | [`text`] | `glt-text` | Tokenizer, typed split family, join, chomp |
//! | [`types`] | `glt-core` | Error taxonomy and the shutdown token |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and the cooperative shutdown token (`glt-core`).
pub use glt_core as types;

/// Log-domain summation and genotype-calling helpers (`glt-numeric`).
pub use glt_numeric as numeric;

/// Shape-tagged array containers (`glt-array`).
pub use glt_array as array;

/// Tokenizer, split, and join routines (`glt-text`).
pub use glt_text as text;

/// Common imports for typical glt usage.
///
/// ```rust
/// use glt::prelude::*;
/// ```
pub mod prelude {
    // Errors and shutdown
    pub use glt_core::{NumericError, ShapeError, ShutdownToken};

    // Numeric stability
    pub use glt_numeric::{
        arg_max, clamp_probability, hard_call, logsum, logsum2, logsum3, map_in_place,
        uniform_random,
    };

    // Arrays
    pub use glt_array::{CharBuf, CharGrid, NdArray, Shape};

    // Text
    pub use glt_text::{
        chomp, join, split_doubles, split_floats, split_ints, split_strings, Tokenizer,
    };
}
