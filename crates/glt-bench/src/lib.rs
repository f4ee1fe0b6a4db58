//! Shared fixtures for the glt benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

/// A deterministic log-likelihood vector of the given length, spanning
/// a few hundred log units so the max-factoring path is exercised.
pub fn log_likelihoods(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| -((i % 97) as f64) * 3.7 - 1.0)
        .collect()
}

/// A comma-delimited row of `len` numeric columns with every 13th
/// column malformed, matching the filtering rate of messy input.
pub fn delimited_row(len: usize) -> String {
    let cols: Vec<String> = (0..len)
        .map(|i| {
            if i % 13 == 12 {
                "n/a".to_owned()
            } else {
                format!("{:.6}", (i as f64) * 0.125)
            }
        })
        .collect();
    cols.join(",")
}
