//! Core SupportChatApp struct definition and initialization

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::thread;
use std::time::Duration;

use crate::autoscroll::AutoScroll;
use crate::config::{Settings, save_settings};
use crate::protocol::{FeedEvent, SourceAction};
use crate::shim::GlobalNamespace;
use crate::source::{DEMO_CONVERSATION, run_source};
use crate::state::ChatState;
use crate::ui;

pub struct SupportChatApp {
    // Feed, panel visibility, source status
    pub state: ChatState,

    // Channels for source communication
    pub action_tx: Sender<SourceAction>,
    pub event_rx: Receiver<FeedEvent>,

    // Scroll tracking for the feed
    pub autoscroll: AutoScroll,

    pub theme: ui::ChatTheme,
    pub settings: Settings,

    // Namespace prepared by the compatibility shim at startup
    pub globals: GlobalNamespace,
}

impl SupportChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, globals: GlobalNamespace) -> Self {
        let (action_tx, action_rx) = unbounded::<SourceAction>();
        let (event_tx, event_rx) = unbounded::<FeedEvent>();

        // Spawn the message source thread
        let interval = Duration::from_millis(settings.demo_interval_ms);
        thread::spawn(move || {
            run_source(DEMO_CONVERSATION, interval, action_rx, event_tx);
        });

        let theme = ui::ChatTheme::from_name(&settings.theme);
        ui::theme::apply_app_style(&cc.egui_ctx, &theme);

        Self {
            state: ChatState::new(settings.open_on_start),
            action_tx,
            event_rx,
            autoscroll: AutoScroll::new(),
            theme,
            settings,
            globals,
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &eframe::egui::Context) {
        self.theme = if self.theme.is_dark() {
            ui::ChatTheme::light()
        } else {
            ui::ChatTheme::dark()
        };
        ui::theme::apply_app_style(ctx, &self.theme);

        self.settings.theme = self.theme.name.clone();
        if let Err(e) = save_settings(&self.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

impl Drop for SupportChatApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(SourceAction::Shutdown);
    }
}
