//! Display list: the layout engine's output structure
//!
//! Everything the JavaScript side needs to paint a commented lyrics page,
//! pre-computed: composited highlight runs over the text and lane-assigned
//! gutter markers. No layout math remains for the renderer.

pub use super::highlight::HighlightRun;
pub use super::markers::RenderMarker;
use super::{highlight_runs, layout_markers};
use crate::models::Comment;
use serde::{Deserialize, Serialize};

/// Top-level layout output for one song's comment set
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Composited highlight color runs, in text order
    pub runs: Vec<HighlightRun>,

    /// Gutter markers with lane assignments
    pub markers: Vec<RenderMarker>,

    /// Number of marker lanes in use (gutter width in columns)
    pub lane_count: usize,
}

/// Compute the full display list for a lyrics snapshot
///
/// `selected` is the comment whose highlight overrides blending within
/// its span, if any.
pub fn compute_display_list(
    lyrics: &str,
    comments: &[Comment],
    selected: Option<&Comment>,
) -> DisplayList {
    let runs = highlight_runs(lyrics, comments, selected);
    let (markers, lane_count) = layout_markers(lyrics, comments);
    log::debug!(
        "display list: {} comments -> {} runs, {} markers in {} lanes",
        comments.len(),
        runs.len(),
        markers.len(),
        lane_count
    );
    DisplayList {
        runs,
        markers,
        lane_count,
    }
}
