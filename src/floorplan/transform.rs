//! Venue <-> Surface Coordinate Mapping
//!
//! One uniform scale fits the venue inside the padded viewport; zoom multiplies
//! it and pan shifts the centered footprint. The renderer and the hit-tester
//! both go through [`ViewTransform`] and [`LocalFrame`].

use eframe::egui::{emath::Rot2, Pos2, Rect, Vec2};

use super::model::{LayoutObject, Venue};

/// World -> screen mapping for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pixels per venue unit (base scale * zoom)
    pub scale: f32,

    /// Screen position of venue point (0, 0)
    pub origin: Pos2,
}

impl ViewTransform {
    /// Scale that fits `venue` inside `viewport` minus `padding` on every side.
    pub fn base_scale(viewport: Rect, venue: &Venue, padding: f32) -> f32 {
        if !venue.is_valid() {
            return 1.0;
        }
        let available_w = (viewport.width() - padding * 2.0).max(1.0);
        let available_h = (viewport.height() - padding * 2.0).max(1.0);
        let scale_x = available_w / venue.width;
        let scale_y = available_h / venue.length;
        scale_x.min(scale_y)
    }

    pub fn compute(viewport: Rect, venue: &Venue, zoom: f32, pan: Vec2, padding: f32) -> Self {
        let scale = Self::base_scale(viewport, venue, padding) * zoom;
        let footprint = Vec2::new(venue.width.max(0.0), venue.length.max(0.0)) * scale;
        let origin = viewport.center() + pan - footprint / 2.0;
        Self { scale, origin }
    }

    pub fn to_screen(&self, venue_pos: Pos2) -> Pos2 {
        self.origin + venue_pos.to_vec2() * self.scale
    }

    pub fn to_venue(&self, screen_pos: Pos2) -> Pos2 {
        ((screen_pos - self.origin) / self.scale).to_pos2()
    }

    /// Venue rectangle on screen
    pub fn footprint(&self, venue: &Venue) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(venue.width, venue.length) * self.scale)
    }

    /// Translate/rotate frame anchored at the object's (x, y)
    pub fn frame_for(&self, object: &LayoutObject) -> LocalFrame {
        LocalFrame {
            anchor: self.to_screen(Pos2::new(object.x, object.y)),
            angle: object.rotation_radians(),
        }
    }
}

/// An object's local drawing frame.
///
/// Local offsets are in screen pixels (already scaled) relative to the anchor,
/// before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub anchor: Pos2,

    /// Rotation in radians
    pub angle: f32,
}

impl LocalFrame {
    fn rotation(&self) -> Rot2 {
        Rot2::from_angle(self.angle)
    }

    pub fn to_screen(&self, local: Vec2) -> Pos2 {
        self.anchor + self.rotation() * local
    }

    pub fn to_local(&self, screen: Pos2) -> Vec2 {
        self.rotation().inverse() * (screen - self.anchor)
    }

    pub fn is_rotated(&self) -> bool {
        self.angle.rem_euclid(std::f32::consts::TAU).abs() > f32::EPSILON
    }

    /// Corners of the local rect `[min, min + size]`, clockwise from top-left
    pub fn quad(&self, min: Vec2, size: Vec2) -> Vec<Pos2> {
        vec![
            self.to_screen(min),
            self.to_screen(min + Vec2::new(size.x, 0.0)),
            self.to_screen(min + size),
            self.to_screen(min + Vec2::new(0.0, size.y)),
        ]
    }
}
