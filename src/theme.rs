//! Application color themes

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

/// Which built-in palette to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// VS Code Dark+/Light+ inspired palette
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub selected_bg: Color32,
    pub bg: Color32,
    pub editor_bg: Color32,
    pub sidebar_bg: Color32,

    pub fg: Color32,
    pub fg_dim: Color32,
    pub fg_bright: Color32,

    pub accent: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            selected_bg: Color32::from_rgb(0, 120, 212), // Blue accent background

            bg: Color32::from_rgb(30, 30, 30),         // #1e1e1e
            editor_bg: Color32::from_rgb(30, 30, 30),  // #1e1e1e
            sidebar_bg: Color32::from_rgb(37, 37, 38), // #252526

            fg: Color32::from_rgb(204, 204, 204),     // #cccccc
            fg_dim: Color32::from_rgb(128, 128, 128), // #808080
            fg_bright: Color32::from_rgb(255, 255, 255), // #ffffff

            accent: Color32::from_rgb(0, 120, 212), // #0078d4
            error: Color32::from_rgb(248, 81, 73),   // #f85149

            border: Color32::from_rgb(60, 60, 60), // #3c3c3c
        }
    }

    pub fn light() -> Self {
        Self {
            selected_bg: Color32::from_rgb(0, 120, 212),

            bg: Color32::from_rgb(255, 255, 255),        // #ffffff
            editor_bg: Color32::from_rgb(255, 255, 255), // #ffffff
            sidebar_bg: Color32::from_rgb(243, 243, 243), // #f3f3f3

            fg: Color32::from_rgb(51, 51, 51),        // #333333
            fg_dim: Color32::from_rgb(128, 128, 128), // #808080
            fg_bright: Color32::from_rgb(0, 0, 0),    // #000000

            accent: Color32::from_rgb(0, 120, 212), // #0078d4
            error: Color32::from_rgb(200, 50, 50),   // red

            border: Color32::from_rgb(200, 200, 200), // light gray
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn is_light(&self) -> bool {
        let brightness = (self.bg.r() as u32 + self.bg.g() as u32 + self.bg.b() as u32) / 3;
        brightness > 128
    }

    /// Apply to egui's global visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.panel_fill = self.sidebar_bg;
        visuals.window_fill = self.editor_bg;
        visuals.override_text_color = Some(self.fg);
        visuals.selection.bg_fill = self.selected_bg;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light() {
        assert!(!Theme::dark().is_light());
        assert!(Theme::light().is_light());
        assert!(Theme::from_choice(ThemeChoice::Light).is_light());
    }
}
