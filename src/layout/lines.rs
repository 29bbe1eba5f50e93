//! Character-offset to line-number conversion
//!
//! Lyrics offsets are character offsets into the whole text; gutter
//! markers are laid out per line. Lines are 1-indexed. Each line consumes
//! its characters plus one for the newline that ends it.
//!
//! Boundary decision: an offset equal to the text length resolves to the
//! last line. A selection that runs to end-of-text ends at a valid caret
//! position on the last line, so treating it as out-of-range would make
//! every select-to-end comment unmappable. Offsets strictly beyond the
//! text length are a validation error, never a sentinel value.

use crate::models::{AnnotationError, Result};
use serde::{Deserialize, Serialize};

/// A 1-indexed line range, inclusive on both ends
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub start_line: usize,
    pub end_line: usize,
}

/// Map a single character offset to its 1-indexed line number
///
/// `offset == len` maps to the last line (see module docs). Larger
/// offsets error.
pub fn offset_to_line(text: &str, offset: usize) -> Result<usize> {
    let mut consumed = 0;
    for (i, line) in text.split('\n').enumerate() {
        let len = line.chars().count();
        // the +1 accounts for the newline this line consumes
        if offset < consumed + len + 1 {
            return Ok(i + 1);
        }
        consumed += len + 1;
    }
    // split() yields at least one line, so consumed == total + 1 here;
    // any offset that reaches this point is past end-of-text
    Err(AnnotationError::SpanOutOfBounds {
        start: offset,
        end: offset,
        len: consumed.saturating_sub(1),
    })
}

/// Map a half-open character span onto its covering line range
pub fn offsets_to_lines(text: &str, start: usize, end: usize) -> Result<LineSpan> {
    if start > end {
        return Err(AnnotationError::InvalidSpan { start, end });
    }
    Ok(LineSpan {
        start_line: offset_to_line(text, start)?,
        end_line: offset_to_line(text, end)?,
    })
}
