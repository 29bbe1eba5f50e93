//! Domain data model for the lyrics annotation engine
//!
//! Comments, colors, intervals, and song snapshots. Everything here is
//! plain data with serde derives; the layout core consumes immutable
//! references to these types.

pub mod color;
pub mod comment;
pub mod interval;
pub mod song;

pub use color::Rgba;
pub use comment::{Comment, CommentId, MinimalComment, SongId};
pub use interval::Interval;
pub use song::Song;

use thiserror::Error;

/// Validation errors raised at the model boundary
///
/// Malformed spans are rejected before they reach the layout core rather
/// than being clamped, so upstream data corruption stays visible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("invalid span: start {start} is past end {end}")]
    InvalidSpan { start: usize, end: usize },
    #[error("span {start}..{end} is out of bounds for text of length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AnnotationError>;

/// Validate a half-open character span against a text length
///
/// `end == len` is allowed: a span may run to the end of the text.
pub fn validate_span(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(AnnotationError::InvalidSpan { start, end });
    }
    if end > len {
        return Err(AnnotationError::SpanOutOfBounds { start, end, len });
    }
    Ok(())
}
