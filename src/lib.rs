//! Floorplan Studio - Interactive Venue Floor Plans
//!
//! Renders venue layouts with pan/zoom and resolves clicks to layout objects.

pub mod config;
pub mod floorplan;
pub mod theme;

// Re-export commonly used types
pub use config::{ConfigError, ViewerConfig};
pub use floorplan::{
    hit_test, load_layout, parse_layout, render_scene, resolve_style, FloorPlanViewer,
    InteractionController, LayoutData, LayoutObject, LoadError, Member, ScenePainter, Venue,
    ViewState, ViewTransform,
};
pub use theme::{Theme, ThemeChoice};
