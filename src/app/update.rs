//! Main update loop

use eframe::egui::{self, RichText};
use std::time::Duration;

use super::SupportChatApp;
use crate::ui::{self, HeaderAction};

impl eframe::App for SupportChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process source events
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                match ui::render_header(ui, self.state.is_open, self.state.source_live, &self.theme) {
                    Some(HeaderAction::TogglePanel) => self.state.toggle_open(),
                    Some(HeaderAction::ToggleTheme) => self.toggle_theme(ctx),
                    None => {}
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[2])
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                if self.state.is_open {
                    ui::render_feed(
                        ui,
                        &self.state.feed,
                        true,
                        &mut self.autoscroll,
                        &self.theme,
                    );
                } else {
                    // Keep the tracker current so reopening scrolls to the end
                    self.autoscroll
                        .on_update(self.state.feed.revision(), self.state.feed.len(), false);
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        let hint = match self.state.feed.len() {
                            0 => "Chat is closed".to_string(),
                            n => format!("Chat is closed · {} messages", n),
                        };
                        ui.label(RichText::new(hint).color(self.theme.text_muted));
                    });
                }

                if let Some(status) = &self.state.source_status {
                    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                        ui.label(RichText::new(status).small().color(self.theme.text_muted));
                    });
                }
            });
    }
}
