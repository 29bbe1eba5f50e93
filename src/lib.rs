//! Lyrics Annotation Engine WASM Module
//!
//! The algorithmic core of a lyrics-annotation app: given a song's lyrics
//! and a set of possibly-overlapping comment spans, compute composited
//! highlight colors and collision-free gutter marker lanes as a display
//! list for a JavaScript renderer.

pub mod api;
pub mod hit_test;
pub mod layout;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use layout::{compute_display_list, DisplayList, HighlightRun, RenderMarker};
pub use models::{AnnotationError, Comment, CommentId, MinimalComment, Result, Rgba, Song};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Lyrics annotation engine WASM module initialized");
}
