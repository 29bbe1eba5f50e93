//! Small presentation-adjacent helpers

pub mod time;

pub use time::format_mm_ss;
