//! Comment records: user annotations on spans of lyric text
//!
//! A comment owns a half-open `[start, end)` character span into its
//! song's lyrics, a CSS color, and optional title/content text. A linked
//! comment carries the id of the song it was originally authored against;
//! its span is interpreted against that song's lyrics, not the one it is
//! displayed on.

use super::{validate_span, Result};
use serde::{Deserialize, Serialize};

/// Opaque comment identifier assigned by the host data layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Numeric song identifier (lrclib track id)
pub type SongId = i64;

/// A user-authored annotation on a span of lyrics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: CommentId,

    /// Start of the annotated span (inclusive, character offset)
    pub start: usize,

    /// End of the annotated span (exclusive, character offset)
    pub end: usize,

    /// Raw CSS color string; parsed lazily at composite time
    pub color: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    /// `Some(song)` when this comment was authored against another song
    /// and attached here by reference
    #[serde(default)]
    pub linked: Option<SongId>,
}

impl Comment {
    /// Whether the given character index falls inside the span
    pub fn covers(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Span length in characters; zero-width comments cover nothing
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_linked(&self) -> bool {
        self.linked.is_some()
    }

    /// Validate this comment's span against the lyrics it annotates
    pub fn validate(&self, lyrics_len: usize) -> Result<()> {
        validate_span(self.start, self.end, lyrics_len)
    }
}

/// The shared-snapshot projection of a comment
///
/// Read-only share links carry only the span, color, and text of each
/// comment; identity and linkage stay private to the author.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MinimalComment {
    pub start: usize,
    pub end: usize,
    pub color: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<&Comment> for MinimalComment {
    fn from(c: &Comment) -> Self {
        Self {
            start: c.start,
            end: c.end,
            color: c.color.clone(),
            title: c.title.clone(),
            content: c.content.clone(),
        }
    }
}
