//! Text tokenization for delimited genotype data.
//!
//! A [`Tokenizer`] walks a string one token at a time against a
//! separator set, preserving empty tokens for consecutive or trailing
//! separators. The typed split family builds on it with a permissive
//! filtering policy: malformed numeric tokens are dropped, never
//! reported — heterogeneous input rows are expected to carry the odd
//! non-numeric column. That leniency is deliberately distinct from the
//! fatal NaN policy in `glt-numeric`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod join;
pub mod lines;
pub mod split;
pub mod tokenizer;

pub use join::{join, Render};
pub use lines::chomp;
pub use split::{
    double_fate, float_fate, int_fate, split_doubles, split_floats, split_ints, split_strings,
    TokenFate,
};
pub use tokenizer::Tokenizer;
