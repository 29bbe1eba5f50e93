//! Annotation Layout Engine
//!
//! Computes everything the presentation layer needs to draw a commented
//! lyrics page without doing any layout math of its own: composited
//! highlight runs over the text, and collision-free gutter marker lanes.
//! All functions are pure and operate on an immutable snapshot of the
//! comment set; live-update behavior belongs to the caller's data layer.

pub mod display_list;
pub mod highlight;
pub mod lines;
pub mod markers;
pub mod partition;

pub use display_list::{compute_display_list, DisplayList, HighlightRun, RenderMarker};
pub use highlight::{composite_color_at, highlight_runs};
pub use lines::{offset_to_line, offsets_to_lines, LineSpan};
pub use markers::layout_markers;
pub use partition::partition_intervals;
