//! egui painting of a planned feed.

use eframe::egui::{self, Align, CornerRadius, Layout, RichText};

use crate::autoscroll::AutoScroll;
use crate::message::ChatFeed;
use crate::ui::theme::ChatTheme;

use super::layout::{
    BUBBLE_MAX_WIDTH_FRACTION, EmptyState, FeedView, MessageRow, RowAlign, RowBody, SquaredCorner,
    plan_feed,
};

const BUBBLE_RADIUS: u8 = 16;
const SQUARED_RADIUS: u8 = 4;
const EMOJI_SIZE: f32 = 36.0;

/// Render the message list (or the empty placeholder) inside a scroll area.
///
/// After the rows are laid out the auto-scroll tracker is consulted; when it
/// fires, the end anchor below the last row is scrolled into view.
pub fn render_feed(
    ui: &mut egui::Ui,
    feed: &ChatFeed,
    is_open: bool,
    autoscroll: &mut AutoScroll,
    theme: &ChatTheme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add_space(16.0);

            match plan_feed(feed.messages()) {
                FeedView::Empty(state) => render_empty_state(ui, &state, theme),
                FeedView::Rows(rows) => {
                    for row in &rows {
                        ui.push_id(row.key, |ui| render_row(ui, row, theme));
                        ui.add_space(12.0);
                    }
                }
            }

            let anchor = ui.allocate_response(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            if autoscroll.on_update(feed.revision(), feed.len(), is_open) {
                anchor.scroll_to_me(Some(Align::BOTTOM));
            }
        });
}

fn render_empty_state(ui: &mut egui::Ui, state: &EmptyState, theme: &ChatTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(
            RichText::new(state.icon)
                .size(32.0)
                .color(theme.text_muted.gamma_multiply(0.5)),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(state.title).size(14.0).color(theme.text_muted));
        ui.add_space(4.0);
        ui.label(RichText::new(state.hint).size(11.0).color(theme.text_muted));
        ui.add_space(32.0);
    });
}

fn render_row(ui: &mut egui::Ui, row: &MessageRow<'_>, theme: &ChatTheme) {
    let layout = match row.align {
        RowAlign::End => Layout::right_to_left(Align::TOP),
        RowAlign::Start => Layout::left_to_right(Align::TOP),
    };
    let max_width = ui.available_width() * BUBBLE_MAX_WIDTH_FRACTION;

    ui.horizontal(|ui| {
        ui.with_layout(layout, |ui| match &row.body {
            RowBody::Emoji(text) => {
                ui.add_space(4.0);
                ui.label(RichText::new(*text).size(EMOJI_SIZE));
            }
            RowBody::Bubble {
                content,
                role,
                squared,
                meta,
            } => {
                let colors = theme.bubble_colors(*role);
                egui::Frame::new()
                    .fill(colors.fill)
                    .stroke(colors.stroke)
                    .corner_radius(bubble_corners(*squared))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_max_width(max_width);
                        ui.vertical(|ui| {
                            ui.add(
                                egui::Label::new(RichText::new(*content).size(14.0).color(colors.text))
                                    .wrap(),
                            );
                            ui.add_space(6.0);
                            ui.label(RichText::new(meta.as_str()).size(11.0).color(colors.meta));
                        });
                    });
            }
        });
    });
}

fn bubble_corners(squared: SquaredCorner) -> CornerRadius {
    let mut corners = CornerRadius::same(BUBBLE_RADIUS);
    match squared {
        SquaredCorner::BottomLeft => corners.sw = SQUARED_RADIUS,
        SquaredCorner::BottomRight => corners.se = SQUARED_RADIUS,
    }
    corners
}
