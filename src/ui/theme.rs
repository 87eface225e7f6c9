//! Color palette and text styles for the support chat panel.
//!
//! Two palettes are provided, dark and light. Visitor bubbles use the
//! "glow green" accent with dark "midnight" text; admin bubbles use a muted
//! surface with a thin border.

use std::collections::BTreeMap;

use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle};

use crate::message::SenderRole;

#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    /// [0] app background, [1] header, [2] message area
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub midnight: Color32,
    pub muted_fill: Color32,
    pub muted_border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub success: Color32,
}

/// Fill, text, meta-line and border colors of one bubble
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleColors {
    pub fill: Color32,
    pub text: Color32,
    pub meta: Color32,
    pub stroke: Stroke,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            surface: [
                Color32::from_rgb(9, 12, 20),
                Color32::from_rgb(17, 21, 32),
                Color32::from_rgb(13, 17, 27),
            ],
            accent: Color32::from_rgb(57, 255, 136),
            midnight: Color32::from_rgb(10, 15, 30),
            muted_fill: Color32::from_rgba_unmultiplied(39, 44, 58, 204),
            muted_border: Color32::from_rgba_unmultiplied(39, 44, 58, 102),
            text_primary: Color32::from_rgb(236, 238, 243),
            text_muted: Color32::from_rgb(139, 146, 163),
            success: Color32::from_rgb(57, 255, 136),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 247, 249),
                Color32::from_rgb(250, 250, 252),
            ],
            accent: Color32::from_rgb(46, 224, 120),
            midnight: Color32::from_rgb(10, 15, 30),
            muted_fill: Color32::from_rgba_unmultiplied(228, 231, 237, 204),
            muted_border: Color32::from_rgba_unmultiplied(228, 231, 237, 102),
            text_primary: Color32::from_rgb(17, 20, 28),
            text_muted: Color32::from_rgb(104, 112, 128),
            success: Color32::from_rgb(34, 170, 90),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name != "light"
    }

    pub fn bubble_colors(&self, role: SenderRole) -> BubbleColors {
        match role {
            SenderRole::Visitor => BubbleColors {
                fill: self.accent,
                text: self.midnight,
                meta: self.midnight.gamma_multiply(0.7),
                stroke: Stroke::NONE,
            },
            SenderRole::Admin => BubbleColors {
                fill: self.muted_fill,
                text: self.text_primary,
                meta: self.text_muted,
                stroke: Stroke::new(1.0, self.muted_border),
            },
        }
    }
}

/// Text styles used by the chat panel
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::Proportional;

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into()
}

pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.visuals.panel_fill = theme.surface[2];
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert!(ChatTheme::from_name("dark").is_dark());
        assert!(ChatTheme::from_name("solarized").is_dark());
        assert!(!ChatTheme::from_name("light").is_dark());
    }

    #[test]
    fn test_bubble_colors_differ_by_role() {
        let theme = ChatTheme::dark();
        let visitor = theme.bubble_colors(SenderRole::Visitor);
        let admin = theme.bubble_colors(SenderRole::Admin);

        assert_eq!(visitor.fill, theme.accent);
        assert_eq!(visitor.stroke, Stroke::NONE);
        assert_eq!(admin.fill, theme.muted_fill);
        assert_ne!(admin.stroke, Stroke::NONE);
    }
}
