//! Typed splitting with silent filtering of malformed tokens.

use crate::tokenizer::Tokenizer;

/// Outcome of considering one raw token for a typed split.
///
/// [`TokenFate::Filtered`] is a policy decision, not an error: rows of
/// heterogeneous input data routinely carry non-numeric columns, and
/// the numeric split variants drop them without comment. Keep this
/// distinct from the fatal numeric-data path in `glt-numeric`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenFate<T> {
    /// The token parsed fully and its value is kept.
    Kept(T),
    /// The token did not parse as the requested type and is dropped.
    Filtered,
}

/// Classify a token as a signed integer with automatic base detection.
///
/// Follows `strtol` with base 0: optional leading whitespace, optional
/// sign, then `0x`/`0X` for hex, a leading `0` for octal, decimal
/// otherwise. The whole remainder must be digits of the detected base —
/// `"08"` is a malformed octal literal and is filtered, as is anything
/// with trailing non-numeric characters.
pub fn int_fate(token: &str) -> TokenFate<i64> {
    match parse_auto_base(token) {
        Some(v) => TokenFate::Kept(v),
        None => TokenFate::Filtered,
    }
}

/// Classify a token as an `f32`, filtering anything that does not parse
/// fully (leading whitespace excepted).
pub fn float_fate(token: &str) -> TokenFate<f32> {
    match token.trim_start().parse::<f32>() {
        Ok(v) => TokenFate::Kept(v),
        Err(_) => TokenFate::Filtered,
    }
}

/// Classify a token as an `f64`, filtering anything that does not parse
/// fully (leading whitespace excepted).
pub fn double_fate(token: &str) -> TokenFate<f64> {
    match token.trim_start().parse::<f64>() {
        Ok(v) => TokenFate::Kept(v),
        Err(_) => TokenFate::Filtered,
    }
}

fn parse_auto_base(token: &str) -> Option<i64> {
    let t = token.trim_start();
    let (negative, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };

    let (digits, radix) = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        (hex, 16)
    } else if t.len() > 1 && t.starts_with('0') {
        (&t[1..], 8)
    } else {
        (t, 10)
    };

    // The sign was consumed above; a second one is malformed.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Split on `separators` and parse each non-empty token as a signed
/// integer with automatic base detection; malformed tokens are silently
/// dropped. The returned `Vec`'s length is the kept count.
pub fn split_ints(input: &str, separators: &str) -> Vec<i64> {
    non_empty(input, separators)
        .filter_map(|t| match int_fate(t) {
            TokenFate::Kept(v) => Some(v),
            TokenFate::Filtered => None,
        })
        .collect()
}

/// Split on `separators` and parse each non-empty token as `f32`;
/// malformed tokens are silently dropped.
pub fn split_floats(input: &str, separators: &str) -> Vec<f32> {
    non_empty(input, separators)
        .filter_map(|t| match float_fate(t) {
            TokenFate::Kept(v) => Some(v),
            TokenFate::Filtered => None,
        })
        .collect()
}

/// Split on `separators` and parse each non-empty token as `f64`;
/// malformed tokens are silently dropped.
pub fn split_doubles(input: &str, separators: &str) -> Vec<f64> {
    non_empty(input, separators)
        .filter_map(|t| match double_fate(t) {
            TokenFate::Kept(v) => Some(v),
            TokenFate::Filtered => None,
        })
        .collect()
}

/// Split on `separators`, keeping every non-empty token verbatim.
pub fn split_strings(input: &str, separators: &str) -> Vec<String> {
    non_empty(input, separators).map(str::to_owned).collect()
}

fn non_empty<'a>(input: &'a str, separators: &'a str) -> impl Iterator<Item = &'a str> {
    Tokenizer::new(input, separators).filter(|t| !t.is_empty())
}
