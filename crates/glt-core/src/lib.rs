//! Core support for the glt utility layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by the numeric, array, and text crates,
//! and the cooperative [`ShutdownToken`] long-running callers poll
//! between units of work.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod shutdown;

pub use error::{NumericError, ShapeError};
pub use shutdown::ShutdownToken;
