//! Application module structure for SupportChatApp
//!
//! - `core`: SupportChatApp struct and initialization
//! - `events`: Event processing from the message source
//! - `update`: Main update loop

pub mod core;
pub mod events;
pub mod update;

pub use core::SupportChatApp;
