//! Panel header with the open/close toggle and source status.

use eframe::egui::{self, RichText, Stroke};

use crate::ui::theme::ChatTheme;

/// Actions that the header can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    TogglePanel,
    ToggleTheme,
}

/// Render the header bar.
/// Returns Some(HeaderAction) if the user clicked one of its buttons.
pub fn render_header(
    ui: &mut egui::Ui,
    is_open: bool,
    source_live: bool,
    theme: &ChatTheme,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        // Live indicator: filled dot while the source is delivering
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        if source_live {
            ui.painter().circle_filled(rect.center(), 6.0, theme.success.gamma_multiply(0.25));
            ui.painter().circle_filled(rect.center(), 4.0, theme.success);
        } else {
            ui.painter()
                .circle_stroke(rect.center(), 4.0, Stroke::new(1.5, theme.text_muted));
        }

        ui.label(RichText::new("Support").size(16.0).strong().color(theme.text_primary));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_label = if is_open { "Close chat" } else { "Open chat" };
            if ui.button(toggle_label).clicked() {
                action = Some(HeaderAction::TogglePanel);
            }
            let theme_icon = if theme.is_dark() { "☀" } else { "🌙" };
            if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                action = Some(HeaderAction::ToggleTheme);
            }
        });
    });

    action
}
