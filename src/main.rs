//! Support chat - a visitor/admin support panel built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Source thread: runs a Tokio runtime delivering chat messages
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use support_chat::app::SupportChatApp;
use support_chat::config::load_settings;
use support_chat::shim::{self, GlobalNamespace};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("support_chat=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting support chat");

    let settings = load_settings();

    // Install the compatibility globals once, before any UI code runs
    let mut globals = GlobalNamespace::with_window();
    if let Err(e) = shim::install(&mut globals) {
        tracing::error!("Failed to install compatibility shim: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Support Chat",
        options,
        Box::new(|cc| Ok(Box::new(SupportChatApp::new(cc, settings, globals)))),
    )
}
