//! Line-level cleanup helpers.

/// Remove one trailing newline character (`\n` or `\r`) if present.
///
/// Deliberately removes a single character only: a `"\r\n"` ending
/// loses its `\n` and keeps the `\r`, matching the original reader's
/// behavior. Call twice to strip a full CRLF.
pub fn chomp(line: &mut String) {
    if line.ends_with(['\n', '\r']) {
        line.pop();
    }
}
