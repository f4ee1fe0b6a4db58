//! Fixed-width, zero-padded character buffers.
//!
//! The original carried `char` buffers of a fixed byte width alongside
//! the numeric arrays, initialized by copying a string and zeroing the
//! remainder. [`CharBuf`] is the rank-1 case; [`CharGrid`] is the
//! rank-2 case (a rectangular stack of rows sharing one width).
//!
//! Initial strings longer than the width are truncated to it — at a
//! UTF-8 character boundary, so read-back always yields valid text.
//! Read-back stops at the first NUL, matching C string semantics.

use glt_core::ShapeError;

/// Length in bytes of the longest prefix of `s` that fits in `width`
/// without splitting a UTF-8 character.
fn truncated_len(s: &str, width: usize) -> usize {
    if s.len() <= width {
        return s.len();
    }
    let mut end = width;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// A fixed-width character buffer, zero-padded past its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharBuf {
    data: Vec<u8>,
}

impl CharBuf {
    /// Allocate a buffer of `width` bytes holding `init` truncated to
    /// fit, with the remainder zeroed.
    pub fn new(width: usize, init: &str) -> Result<Self, ShapeError> {
        if width == 0 {
            return Err(ShapeError::ZeroDim { axis: 0 });
        }
        let mut data = vec![0u8; width];
        let len = truncated_len(init, width);
        data[..len].copy_from_slice(&init.as_bytes()[..len]);
        Ok(Self { data })
    }

    /// The fixed width in bytes.
    pub fn width(&self) -> usize {
        self.data.len()
    }

    /// The stored text, up to the first NUL.
    pub fn as_str(&self) -> &str {
        let end = self.data.iter().position(|&b| b == 0).unwrap_or(self.data.len());
        // Construction only ever writes whole UTF-8 characters.
        std::str::from_utf8(&self.data[..end]).unwrap_or_default()
    }

    /// Replace the content with `s` truncated to fit, zeroing the rest.
    pub fn set(&mut self, s: &str) {
        self.data.fill(0);
        let len = truncated_len(s, self.data.len());
        self.data[..len].copy_from_slice(&s.as_bytes()[..len]);
    }
}

/// A rectangular stack of fixed-width character buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    data: Vec<u8>,
}

impl CharGrid {
    /// Allocate `rows` buffers of `width` bytes each, every row holding
    /// `init` truncated to fit with the remainder zeroed.
    pub fn new(rows: usize, width: usize, init: &str) -> Result<Self, ShapeError> {
        if rows == 0 {
            return Err(ShapeError::ZeroDim { axis: 0 });
        }
        if width == 0 {
            return Err(ShapeError::ZeroDim { axis: 1 });
        }
        let mut data = vec![0u8; rows * width];
        let len = truncated_len(init, width);
        if len > 0 {
            for row in data.chunks_exact_mut(width) {
                row[..len].copy_from_slice(&init.as_bytes()[..len]);
            }
        }
        Ok(Self { width, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.len() / self.width
    }

    /// The fixed row width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The text of row `i`, up to its first NUL.
    pub fn row_str(&self, i: usize) -> Result<&str, ShapeError> {
        let row = self.row(i)?;
        let end = row.iter().position(|&b| b == 0).unwrap_or(row.len());
        Ok(std::str::from_utf8(&row[..end]).unwrap_or_default())
    }

    /// Replace row `i` with `s` truncated to fit, zeroing the rest.
    pub fn set_row(&mut self, i: usize, s: &str) -> Result<(), ShapeError> {
        let width = self.width;
        let row = self.row_mut(i)?;
        row.fill(0);
        let len = truncated_len(s, width);
        row[..len].copy_from_slice(&s.as_bytes()[..len]);
        Ok(())
    }

    fn row(&self, i: usize) -> Result<&[u8], ShapeError> {
        let rows = self.rows();
        if i >= rows {
            return Err(ShapeError::IndexOutOfBounds { axis: 0, index: i, dim: rows });
        }
        Ok(&self.data[i * self.width..(i + 1) * self.width])
    }

    fn row_mut(&mut self, i: usize) -> Result<&mut [u8], ShapeError> {
        let rows = self.rows();
        if i >= rows {
            return Err(ShapeError::IndexOutOfBounds { axis: 0, index: i, dim: rows });
        }
        Ok(&mut self.data[i * self.width..(i + 1) * self.width])
    }
}
