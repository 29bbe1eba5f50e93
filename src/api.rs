//! WASM API for the annotation layout engine
//!
//! This module provides the JavaScript-facing surface: display-list
//! computation, single-character compositing, caret hit-testing, and the
//! excerpt/formatting helpers. All structured values cross the boundary
//! through serde-wasm-bindgen; validation failures come back as rejected
//! promises with the typed error's message.

use crate::layout::{composite_color_at, compute_display_list};
use crate::models::{Comment, Song};
use crate::utils::format_mm_ss;
use wasm_bindgen::prelude::*;

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    let msg = format!("{}: {}", context, e);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

fn find_selected<'a>(comments: &'a [Comment], selected_id: Option<&str>) -> Option<&'a Comment> {
    selected_id.and_then(|id| comments.iter().find(|c| c.id.as_str() == id))
}

/// Compute the display list for a lyrics snapshot and its comments
///
/// # Parameters
/// - `lyrics`: the song's plain lyrics text
/// - `comments_js`: JavaScript array of comment records
/// - `selected_id`: id of the selected comment, if any; its highlight
///   overrides blending within its span
///
/// # Returns
/// A `DisplayList` object: `{ runs, markers, lane_count }`
#[wasm_bindgen(js_name = layoutComments)]
pub fn layout_comments(
    lyrics: &str,
    comments_js: JsValue,
    selected_id: Option<String>,
) -> Result<JsValue, JsValue> {
    let comments: Vec<Comment> = serde_wasm_bindgen::from_value(comments_js)
        .map_err(|e| js_err("comment deserialization failed", e))?;
    log::debug!(
        "layoutComments: {} chars, {} comments, selected={:?}",
        lyrics.chars().count(),
        comments.len(),
        selected_id
    );
    let selected = find_selected(&comments, selected_id.as_deref());
    let display_list = compute_display_list(lyrics, &comments, selected);
    serde_wasm_bindgen::to_value(&display_list)
        .map_err(|e| js_err("display list serialization failed", e))
}

/// Composite the highlight color for a single character index
///
/// Returns an `{ r, g, b, a }` object; fully transparent when nothing
/// covers the index.
#[wasm_bindgen(js_name = compositeAt)]
pub fn composite_at(
    index: u32,
    comments_js: JsValue,
    selected_id: Option<String>,
) -> Result<JsValue, JsValue> {
    let comments: Vec<Comment> = serde_wasm_bindgen::from_value(comments_js)
        .map_err(|e| js_err("comment deserialization failed", e))?;
    let selected = find_selected(&comments, selected_id.as_deref());
    let color = composite_color_at(index as usize, &comments, selected);
    serde_wasm_bindgen::to_value(&color).map_err(|e| js_err("color serialization failed", e))
}

/// Character index under a viewport point, or `undefined` if indeterminate
#[wasm_bindgen(js_name = hitTest)]
pub fn hit_test(container: &web_sys::Element, x: f32, y: f32) -> Option<u32> {
    crate::hit_test::hit_test(container, x, y)
}

/// The lyrics fragment a span annotates, for read-only comment cards
#[wasm_bindgen(js_name = commentExcerpt)]
pub fn comment_excerpt(song_js: JsValue, start: u32, end: u32) -> Result<String, JsValue> {
    let song: Song = serde_wasm_bindgen::from_value(song_js)
        .map_err(|e| js_err("song deserialization failed", e))?;
    song.excerpt(start as usize, end as usize)
        .map_err(|e| js_err("excerpt failed", e))
}

/// Format a millisecond duration as `mm:ss`
#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(milliseconds: f64) -> String {
    format_mm_ss(milliseconds.max(0.0) as u64)
}
