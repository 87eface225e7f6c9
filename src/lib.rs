//! Support chat panel library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod autoscroll;
pub mod config;
pub mod emoji;
pub mod message;
pub mod protocol;
pub mod shim;
pub mod source;
pub mod state;
pub mod ui;

mod integration_tests;
