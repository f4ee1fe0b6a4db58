//! Rendering delimited strings from numeric arrays.

/// A value the [`join`] routine knows how to render.
///
/// The original carried one join overload per element type; a small
/// trait at the same seam lets each type pick its own text form:
/// unsigned integers render as plain decimal, doubles as fixed-point
/// with 10 fractional digits.
pub trait Render {
    /// Append this value's text form to `out`.
    fn render_to(&self, out: &mut String);
}

impl Render for u32 {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl Render for u64 {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl Render for f64 {
    fn render_to(&self, out: &mut String) {
        out.push_str(&format!("{self:.10}"));
    }
}

/// Concatenate the rendered elements with `separator` between
/// consecutive elements. No trailing separator.
///
/// # Panics
///
/// Panics if `values` is empty — the first element is rendered
/// unconditionally before the loop.
pub fn join<T: Render>(values: &[T], separator: &str) -> String {
    assert!(!values.is_empty(), "join requires at least one value");

    let mut out = String::new();
    values[0].render_to(&mut out);
    for value in &values[1..] {
        out.push_str(separator);
        value.render_to(&mut out);
    }
    out
}
