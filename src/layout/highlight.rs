//! Highlight color compositing
//!
//! Every character of the lyrics picks up a single RGBA value: the
//! source-over blend of all comments covering it, folded right-to-left so
//! the first comment in the list is the top layer. A selected comment
//! overrides blending entirely within its span, at full opacity. This
//! replacement (rather than layering the selection on top) is deliberate
//! visual semantics; do not turn it into a blend.

use crate::models::color::{parse_css_color, Rgba};
use crate::models::Comment;
use std::collections::BTreeSet;

/// Composite the highlight color for one character index
///
/// Reference contract, one character at a time. Covering comments keep
/// their supplied list order; unparseable colors drop out (logged once per
/// call site by the sweep, silently here). An empty cover composites to
/// fully transparent.
pub fn composite_color_at(index: usize, comments: &[Comment], selected: Option<&Comment>) -> Rgba {
    if let Some(sel) = selected {
        if sel.covers(index) {
            if let Some(color) = parse_css_color(&sel.color) {
                return color.with_full_alpha();
            }
        }
    }
    comments
        .iter()
        .filter(|c| c.covers(index))
        .filter_map(|c| parse_css_color(&c.color))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        // right-to-left fold: the last covering comment is the base layer
        .fold(Rgba::TRANSPARENT, |dst, src| src.over(dst))
}

/// A maximal run of characters sharing one composited color
///
/// `is_override` marks selected-comment runs so the presentation layer
/// applies its dimming multiplier only to ordinary runs.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct HighlightRun {
    /// First character of the run (inclusive)
    pub start: usize,
    /// One past the last character of the run
    pub end: usize,
    pub color: Rgba,
    pub is_override: bool,
}

/// Build the highlight overlay as color runs in a single sweep
///
/// Instead of re-scanning every comment for every character, collect the
/// offsets where coverage can change (span edges plus newlines), composite
/// once per segment, and merge equal neighbors. Newline characters are
/// never highlighted and always break runs, matching the renderer which
/// passes newlines through untouched. Runs that composite to nothing
/// (alpha 0) are not emitted.
///
/// Comments with spans that fail validation against the lyrics are skipped
/// with a warning; one corrupt annotation must not blank the overlay.
pub fn highlight_runs(
    lyrics: &str,
    comments: &[Comment],
    selected: Option<&Comment>,
) -> Vec<HighlightRun> {
    let len = lyrics.chars().count();
    if len == 0 {
        return Vec::new();
    }

    let valid: Vec<&Comment> = comments
        .iter()
        .filter(|c| match c.validate(len) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("skipping comment {} in highlight: {}", c.id.as_str(), e);
                false
            }
        })
        .collect();

    let mut bounds: BTreeSet<usize> = BTreeSet::new();
    bounds.insert(0);
    bounds.insert(len);
    for c in &valid {
        bounds.insert(c.start);
        bounds.insert(c.end);
    }
    if let Some(sel) = selected {
        bounds.insert(sel.start.min(len));
        bounds.insert(sel.end.min(len));
    }
    // newlines break runs and are skipped outright
    let newline_offsets: BTreeSet<usize> = lyrics
        .chars()
        .enumerate()
        .filter(|(_, ch)| *ch == '\n')
        .map(|(i, _)| i)
        .collect();
    for &nl in &newline_offsets {
        bounds.insert(nl);
        bounds.insert(nl + 1);
    }

    // Parse each color once; the per-segment fold then touches only spans
    let parsed: Vec<(usize, usize, Rgba)> = valid
        .iter()
        .filter_map(|c| parse_css_color(&c.color).map(|rgba| (c.start, c.end, rgba)))
        .collect();
    let selected_parsed =
        selected.and_then(|s| parse_css_color(&s.color).map(|rgba| (s.start, s.end, rgba)));

    let mut runs: Vec<HighlightRun> = Vec::new();
    let edges: Vec<usize> = bounds.into_iter().collect();
    for pair in edges.windows(2) {
        let (seg_start, seg_end) = (pair[0], pair[1]);
        if newline_offsets.contains(&seg_start) {
            continue;
        }
        let override_color = selected_parsed
            .filter(|(s, e, _)| seg_start >= *s && seg_start < *e)
            .map(|(_, _, rgba)| rgba.with_full_alpha());
        let is_override = override_color.is_some();
        let color = override_color.unwrap_or_else(|| {
            parsed
                .iter()
                .filter(|(s, e, _)| seg_start >= *s && seg_start < *e)
                .map(|(_, _, rgba)| *rgba)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .fold(Rgba::TRANSPARENT, |dst, src| src.over(dst))
        });
        if color.a <= 0.0 && !is_override {
            continue;
        }
        match runs.last_mut() {
            Some(prev) if prev.end == seg_start && prev.color == color && prev.is_override == is_override => {
                prev.end = seg_end;
            }
            _ => runs.push(HighlightRun {
                start: seg_start,
                end: seg_end,
                color,
                is_override,
            }),
        }
    }
    runs
}
