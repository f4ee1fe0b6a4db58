//! Numeric stability helpers for genotype-likelihood aggregation.
//!
//! Everything here is synchronous, allocation-free (apart from the RNG
//! in [`uniform_random`]), and safe to call from multiple worker
//! threads as long as each call works on its own buffer.
//!
//! The centrepiece is [`logsum`]: log-domain summation with the maximum
//! factored out so that `log(Σ exp(xᵢ))` neither overflows nor
//! underflows for the likelihood magnitudes this layer sees.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod calling;
pub mod logsum;
pub mod probability;
pub mod random;

pub use calling::{arg_max, hard_call, map_in_place};
pub use logsum::{logsum, logsum2, logsum3};
pub use probability::clamp_probability;
pub use random::uniform_random;
