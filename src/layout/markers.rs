//! Gutter marker lane layout
//!
//! Each comment gets a marker spanning the lines its text covers. Markers
//! whose line ranges overlap must not collide horizontally, so comments
//! are converted to line intervals and partitioned into lanes.

use super::lines::offsets_to_lines;
use super::partition::partition_intervals;
use crate::models::{Comment, CommentId, Interval};
use serde::{Deserialize, Serialize};

/// A positioned gutter marker for one comment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderMarker {
    pub comment_id: CommentId,
    /// Horizontal lane index, 0-based from the text edge outward
    pub lane: usize,
    /// First covered line, 1-indexed
    pub start_line: usize,
    /// Last covered line, 1-indexed, inclusive
    pub end_line: usize,
    /// Raw CSS color, passed through for the presentation layer
    pub color: String,
}

/// Lay out one marker per comment, assigned to collision-free lanes
///
/// Returns the markers plus the number of lanes used (the gutter's
/// required width in marker columns). Comments with invalid spans are
/// skipped with a warning rather than failing the layout.
pub fn layout_markers(lyrics: &str, comments: &[Comment]) -> (Vec<RenderMarker>, usize) {
    let len = lyrics.chars().count();
    let mut intervals: Vec<Interval<&Comment>> = Vec::with_capacity(comments.len());
    for c in comments {
        if let Err(e) = c.validate(len) {
            log::warn!("skipping comment {} in marker layout: {}", c.id.as_str(), e);
            continue;
        }
        match offsets_to_lines(lyrics, c.start, c.end) {
            Ok(span) => {
                // line coverage is inclusive of end_line, so the half-open
                // interval extends one past it
                intervals.push(Interval::new(span.start_line, span.end_line + 1, c));
            }
            Err(e) => {
                log::warn!("skipping comment {} in marker layout: {}", c.id.as_str(), e);
            }
        }
    }

    let lanes = partition_intervals(intervals);
    let lane_count = lanes.len();
    let mut markers: Vec<RenderMarker> = Vec::new();
    for (lane_idx, lane) in lanes.iter().enumerate() {
        for iv in lane {
            markers.push(RenderMarker {
                comment_id: iv.item.id.clone(),
                lane: lane_idx,
                start_line: iv.start,
                end_line: iv.end - 1,
                color: iv.item.color.clone(),
            });
        }
    }
    (markers, lane_count)
}
