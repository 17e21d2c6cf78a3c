//! Drawing Backend Seam
//!
//! The scene renderer only talks to [`ScenePainter`]. [`EguiPainter`] forwards
//! to an `egui::Painter`; [`RecordingPainter`] keeps a command list so scene
//! logic can be checked without a graphics context.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

/// Font request for a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub size: f32,
    pub strong: bool,
}

/// How a text pass is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextPaint {
    /// Solid glyphs
    Fill(Color32),
    /// Wide stroke behind the glyphs
    Halo(Stroke),
}

pub trait ScenePainter {
    fn draw_rect(&mut self, rect: Rect, rounding: f32, fill: Color32, stroke: Stroke);

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke);

    /// Polyline through `points`; closed paths may be filled (convex only)
    fn draw_path(&mut self, points: Vec<Pos2>, closed: bool, fill: Color32, stroke: Stroke);

    /// Text centered on `pos`
    fn draw_text(&mut self, pos: Pos2, text: &str, font: LabelFont, paint: TextPaint);
}

/// Paints onto an egui layer
pub struct EguiPainter<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiPainter<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl ScenePainter for EguiPainter<'_> {
    fn draw_rect(&mut self, rect: Rect, rounding: f32, fill: Color32, stroke: Stroke) {
        self.painter.rect(rect, rounding, fill, stroke);
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.painter.circle(center, radius, fill, stroke);
    }

    fn draw_path(&mut self, points: Vec<Pos2>, closed: bool, fill: Color32, stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        if closed && fill != Color32::TRANSPARENT {
            self.painter
                .add(egui::Shape::convex_polygon(points, fill, stroke));
        } else if closed {
            self.painter.add(egui::Shape::closed_line(points, stroke));
        } else {
            self.painter.add(egui::Shape::line(points, stroke));
        }
    }

    fn draw_text(&mut self, pos: Pos2, text: &str, font: LabelFont, paint: TextPaint) {
        let font_id = FontId::proportional(font.size);
        match paint {
            TextPaint::Fill(color) => {
                self.painter
                    .text(pos, Align2::CENTER_CENTER, text, font_id.clone(), color);
                // egui's default fonts have no bold face; double-strike instead
                if font.strong {
                    self.painter.text(
                        pos + Vec2::new(0.6, 0.0),
                        Align2::CENTER_CENTER,
                        text,
                        font_id,
                        color,
                    );
                }
            }
            TextPaint::Halo(stroke) => {
                let r = stroke.width / 2.0;
                for i in 0..8 {
                    let angle = i as f32 * std::f32::consts::FRAC_PI_4;
                    self.painter.text(
                        pos + Vec2::angled(angle) * r,
                        Align2::CENTER_CENTER,
                        text,
                        font_id.clone(),
                        stroke.color,
                    );
                }
            }
        }
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Path {
        points: Vec<Pos2>,
        closed: bool,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        text: String,
        font: LabelFont,
        paint: TextPaint,
    },
}

/// Records every call in order
#[derive(Debug, Default, Clone)]
pub struct RecordingPainter {
    pub commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text commands for `text`, in draw order
    pub fn texts<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, &'a DrawCommand)> + 'a {
        self.commands
            .iter()
            .enumerate()
            .filter(move |(_, c)| matches!(c, DrawCommand::Text { text: t, .. } if t == text))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl ScenePainter for RecordingPainter {
    fn draw_rect(&mut self, rect: Rect, rounding: f32, fill: Color32, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect {
            rect,
            rounding,
            fill,
            stroke,
        });
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn draw_path(&mut self, points: Vec<Pos2>, closed: bool, fill: Color32, stroke: Stroke) {
        self.commands.push(DrawCommand::Path {
            points,
            closed,
            fill,
            stroke,
        });
    }

    fn draw_text(&mut self, pos: Pos2, text: &str, font: LabelFont, paint: TextPaint) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            font,
            paint,
        });
    }
}
