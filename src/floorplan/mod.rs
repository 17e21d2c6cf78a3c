//! Venue Floor Plan Module
//!
//! Interactive 2D venue layout rendering with:
//! - Uniform fit-to-viewport transform with pan/zoom
//! - Type-driven object styles and glyphs
//! - Topmost-wins pointer hit-testing
//! - Click-to-select with member details for the host

pub mod controller;
pub mod hit;
pub mod loader;
pub mod model;
pub mod painter;
pub mod renderer;
pub mod style;
pub mod theme_mapper;
pub mod transform;
pub mod viewer;

pub use controller::{
    DragSession, GestureOutcome, GestureState, InteractionController, ViewState, MAX_ZOOM,
    MIN_ZOOM,
};
pub use hit::{hit_test, object_at};
pub use loader::{load_layout, parse_layout, LoadError};
pub use model::{LayoutData, LayoutObject, Member, ObjectGeometry, Venue, DEFAULT_OBJECT_SIZE};
pub use painter::{DrawCommand, EguiPainter, LabelFont, RecordingPainter, ScenePainter, TextPaint};
pub use renderer::{render_scene, SceneRenderer, EMPTY_STATE_MESSAGE};
pub use style::{resolve_style, Glyph, ObjectKind, ObjectStyle};
pub use theme_mapper::FloorTheme;
pub use transform::{LocalFrame, ViewTransform};
pub use viewer::FloorPlanViewer;
