//! Support chat message feed: row planning and rendering.

pub mod layout;
mod render;

pub use layout::{EMPTY_STATE, FeedView, MessageRow, RowAlign, RowBody, SUPPORT_LABEL, plan_feed};
pub use render::render_feed;
