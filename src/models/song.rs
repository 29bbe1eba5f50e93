//! Song snapshot: the slice of a track record the engine needs
//!
//! Field names follow the host's camelCase JSON (lrclib track records
//! augmented with library state).

use super::{validate_span, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub artist_name: String,
    pub album_name: String,
    /// Track duration in seconds
    pub duration: f64,
    #[serde(default)]
    pub instrumental: bool,
    #[serde(default)]
    pub plain_lyrics: String,
}

impl Song {
    /// Number of characters in the lyrics (the valid offset space)
    pub fn lyrics_len(&self) -> usize {
        self.plain_lyrics.chars().count()
    }

    /// The quoted lyrics fragment a comment annotates
    ///
    /// Offsets are character offsets, so multi-byte text slices correctly.
    /// The span is validated against the lyrics first.
    pub fn excerpt(&self, start: usize, end: usize) -> Result<String> {
        validate_span(start, end, self.lyrics_len())?;
        Ok(self
            .plain_lyrics
            .chars()
            .skip(start)
            .take(end - start)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnnotationError;

    fn song(lyrics: &str) -> Song {
        Song {
            id: 1,
            name: "Test".to_string(),
            artist_name: "Artist".to_string(),
            album_name: "Album".to_string(),
            duration: 200.0,
            instrumental: false,
            plain_lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn excerpt_slices_by_char_offset() {
        let s = song("ab\ncd\nef");
        assert_eq!(s.excerpt(0, 2).unwrap(), "ab");
        assert_eq!(s.excerpt(3, 5).unwrap(), "cd");
        assert_eq!(s.excerpt(0, 8).unwrap(), "ab\ncd\nef");
    }

    #[test]
    fn excerpt_handles_multibyte_lyrics() {
        let s = song("héllo wörld");
        assert_eq!(s.excerpt(1, 5).unwrap(), "éllo");
        assert_eq!(s.lyrics_len(), 11);
    }

    #[test]
    fn excerpt_rejects_out_of_range() {
        let s = song("short");
        assert_eq!(
            s.excerpt(0, 9),
            Err(AnnotationError::SpanOutOfBounds {
                start: 0,
                end: 9,
                len: 5
            })
        );
    }

    #[test]
    fn deserializes_camel_case_records() {
        let json = r#"{
            "id": 123,
            "name": "Song",
            "artistName": "Someone",
            "albumName": "Record",
            "duration": 183.5,
            "instrumental": false,
            "plainLyrics": "la la la"
        }"#;
        let s: Song = serde_json::from_str(json).unwrap();
        assert_eq!(s.artist_name, "Someone");
        assert_eq!(s.plain_lyrics, "la la la");
    }
}
