//! Theme Mapper for Floor Plans
//!
//! Derives canvas, floor and selection colors from the application theme.

use eframe::egui::Color32;

use crate::theme::Theme;

/// Floor plan colors derived from the app theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorTheme {
    /// Background behind the venue
    pub canvas_bg: Color32,

    /// Background grid lines
    pub grid_color: Color32,

    /// Venue floor fill
    pub floor_fill: Color32,

    /// Venue floor border
    pub floor_stroke: Color32,

    /// Inner floor grid
    pub floor_grid: Color32,

    /// Drop shadow under the floor
    pub floor_shadow: Color32,

    /// Selection outline
    pub selection: Color32,

    /// Label colors
    pub label: Color32,
    pub label_selected: Color32,

    /// Halo behind labels
    pub label_halo: Color32,

    /// Empty-state message
    pub placeholder: Color32,
}

impl FloorTheme {
    pub fn from_theme(theme: &Theme) -> Self {
        let is_dark = !theme.is_light();

        Self {
            canvas_bg: if is_dark {
                darken(theme.editor_bg, 0.1)
            } else {
                darken(theme.editor_bg, 0.03)
            },

            // Grid is very subtle
            grid_color: if is_dark {
                Color32::from_rgba_unmultiplied(255, 255, 255, 15)
            } else {
                Color32::from_rgba_unmultiplied(0, 0, 0, 15)
            },

            // The floor stays light in both modes so the object palette reads
            floor_fill: if is_dark {
                Color32::from_rgb(241, 243, 245)
            } else {
                Color32::WHITE
            },
            floor_stroke: Color32::from_rgb(203, 213, 225),
            floor_grid: Color32::from_rgba_unmultiplied(148, 163, 184, 40),
            floor_shadow: Color32::from_rgba_unmultiplied(0, 0, 0, if is_dark { 90 } else { 30 }),

            selection: theme.accent,

            label: Color32::from_rgb(55, 65, 81),
            label_selected: Color32::from_rgb(17, 24, 39),
            label_halo: Color32::from_rgba_unmultiplied(255, 255, 255, 200),

            placeholder: theme.fg_dim,
        }
    }

    pub fn dark() -> Self {
        Self::from_theme(&Theme::dark())
    }

    pub fn light() -> Self {
        Self::from_theme(&Theme::light())
    }
}

impl Default for FloorTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parse a hex color string to Color32
pub fn parse_hex_color(color_str: &str) -> Option<Color32> {
    let hex = color_str.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else if hex.len() == 8 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    } else {
        None
    }
}

/// Darken a color by a factor (0.0 - 1.0)
fn darken(color: Color32, factor: f32) -> Color32 {
    let factor = (1.0 - factor).max(0.0);
    Color32::from_rgb(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}
