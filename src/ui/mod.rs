//! Text rendering of course progress
//!
//! Turns outlines into styled ratatui lines. Nothing here computes state;
//! every badge, bar and route comes from the progression outlines.

pub mod overview;
pub mod section;
pub mod widgets;

pub use overview::overview_lines;
pub use section::section_lines;
pub use widgets::to_plain_text;
