//! UI rendering modules for the support chat panel.
//!
//! - `header`: title bar with the open/close toggle
//! - `feed`: message list, empty state and auto-scroll anchor
//! - `theme`: palettes and text styles

pub mod feed;
pub mod header;
pub mod theme;

pub use feed::render_feed;
pub use header::{HeaderAction, render_header};
pub use theme::ChatTheme;
