//! Object Style Resolution
//!
//! Maps an object's free-form type string onto a closed set of kinds, and each
//! kind onto its colors and interior glyph.

use eframe::egui::Color32;

/// Known object categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    Stage,
    Table,
    Booth,
    Entrance,
    #[default]
    Other,
}

/// Interior icon drawn inside rectangular objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Vertical podium bar on a baseline
    Podium,
    /// Three-sided storefront with an awning
    Storefront,
    /// Rightward arrow
    Arrow,
    /// Filled dot
    Dot,
    None,
}

/// Fill, stroke and icon colors for one object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectStyle {
    pub fill: Color32,
    pub stroke: Color32,
    pub icon: Color32,
}

impl ObjectKind {
    /// Parse a host type string (case-insensitive)
    pub fn from_type(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "stage" => ObjectKind::Stage,
            "round-table" | "table" => ObjectKind::Table,
            "booth" | "stall" => ObjectKind::Booth,
            "entrance" | "exit" => ObjectKind::Entrance,
            _ => ObjectKind::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Stage => "Stage",
            ObjectKind::Table => "Table",
            ObjectKind::Booth => "Booth",
            ObjectKind::Entrance => "Entrance",
            ObjectKind::Other => "Object",
        }
    }

    pub fn style(&self) -> ObjectStyle {
        match self {
            ObjectKind::Stage => ObjectStyle {
                fill: Color32::from_rgb(237, 233, 254),   // #ede9fe
                stroke: Color32::from_rgb(124, 58, 237),  // #7c3aed
                icon: Color32::from_rgb(109, 40, 217),    // #6d28d9
            },
            ObjectKind::Table => ObjectStyle {
                fill: Color32::from_rgb(254, 243, 199),   // #fef3c7
                stroke: Color32::from_rgb(217, 119, 6),   // #d97706
                icon: Color32::from_rgb(180, 83, 9),      // #b45309
            },
            ObjectKind::Booth => ObjectStyle {
                fill: Color32::from_rgb(209, 250, 229),   // #d1fae5
                stroke: Color32::from_rgb(5, 150, 105),   // #059669
                icon: Color32::from_rgb(4, 120, 87),      // #047857
            },
            ObjectKind::Entrance => ObjectStyle {
                fill: Color32::from_rgb(219, 234, 254),   // #dbeafe
                stroke: Color32::from_rgb(37, 99, 235),   // #2563eb
                icon: Color32::from_rgb(29, 78, 216),     // #1d4ed8
            },
            ObjectKind::Other => ObjectStyle {
                fill: Color32::from_rgb(243, 244, 246),   // #f3f4f6
                stroke: Color32::from_rgb(107, 114, 128), // #6b7280
                icon: Color32::from_rgb(75, 85, 99),      // #4b5563
            },
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            ObjectKind::Stage => Glyph::Podium,
            ObjectKind::Booth => Glyph::Storefront,
            ObjectKind::Entrance => Glyph::Arrow,
            ObjectKind::Table => Glyph::None,
            ObjectKind::Other => Glyph::Dot,
        }
    }
}

/// Colors for a host type string. Never fails; unknown types get the neutral style.
pub fn resolve_style(kind: &str) -> ObjectStyle {
    ObjectKind::from_type(kind).style()
}
