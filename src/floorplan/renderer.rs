//! Floor Plan Scene Renderer
//!
//! Paints, back to front: background grid, venue floor, objects (shape, glyph,
//! selection outline), then labels. Hit-testing relies on this order, so the
//! last object drawn is the topmost one.

use eframe::egui::{Color32, Pos2, Rect, Stroke, Vec2};

use super::controller::ViewState;
use super::model::{LayoutData, LayoutObject, ObjectGeometry};
use super::painter::{LabelFont, ScenePainter, TextPaint};
use super::style::{Glyph, ObjectKind, ObjectStyle};
use super::theme_mapper::{parse_hex_color, FloorTheme};
use super::transform::{LocalFrame, ViewTransform};
use crate::config::ViewerConfig;

/// Message shown when there is no layout
pub const EMPTY_STATE_MESSAGE: &str = "No floor plan loaded";

/// Side of the square icon box glyphs are designed in
const ICON_BOX: f32 = 24.0;

/// Share of the object's shorter side the icon box may cover
const ICON_FILL: f32 = 0.6;

const SEAT_COUNT: usize = 6;

/// Width of the white stroke behind label text
const HALO_WIDTH: f32 = 4.0;

/// Paints one frame of the floor plan
pub struct SceneRenderer<'a> {
    config: &'a ViewerConfig,
    theme: &'a FloorTheme,
}

impl<'a> SceneRenderer<'a> {
    pub fn new(config: &'a ViewerConfig, theme: &'a FloorTheme) -> Self {
        Self { config, theme }
    }

    /// Paint the whole scene into `viewport`
    pub fn render(
        &self,
        painter: &mut impl ScenePainter,
        layout: Option<&LayoutData>,
        view: &ViewState,
        viewport: Rect,
    ) {
        painter.draw_rect(viewport, 0.0, self.theme.canvas_bg, Stroke::NONE);
        if self.config.show_grid {
            self.draw_grid(painter, viewport);
        }

        let Some(layout) = layout else {
            painter.draw_text(
                viewport.center(),
                EMPTY_STATE_MESSAGE,
                LabelFont {
                    size: 16.0,
                    strong: false,
                },
                TextPaint::Fill(self.theme.placeholder),
            );
            return;
        };

        let transform = ViewTransform::compute(
            viewport,
            &layout.venue,
            view.scale,
            view.offset,
            self.config.viewport_padding,
        );

        self.draw_floor(painter, layout, &transform);

        for object in &layout.objects {
            self.draw_object(painter, object, &transform, view.is_selected(&object.id));
        }

        // Labels go last so no later shape covers them
        for object in &layout.objects {
            if let Some(label) = object.label.as_deref() {
                self.draw_label(painter, object, label, &transform, view.is_selected(&object.id));
            }
        }
    }

    /// Screen-space grid at a fixed pixel pitch
    fn draw_grid(&self, painter: &mut impl ScenePainter, rect: Rect) {
        let spacing = self.config.grid_spacing;
        if spacing < 2.0 {
            return;
        }
        let stroke = Stroke::new(1.0, self.theme.grid_color);

        let mut x = rect.min.x + spacing;
        while x < rect.max.x {
            painter.draw_path(
                vec![Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
            x += spacing;
        }

        let mut y = rect.min.y + spacing;
        while y < rect.max.y {
            painter.draw_path(
                vec![Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
            y += spacing;
        }
    }

    fn draw_floor(&self, painter: &mut impl ScenePainter, layout: &LayoutData, transform: &ViewTransform) {
        let floor = transform.footprint(&layout.venue);

        painter.draw_rect(
            floor.translate(Vec2::new(0.0, 4.0)).expand(2.0),
            8.0,
            self.theme.floor_shadow,
            Stroke::NONE,
        );
        painter.draw_rect(
            floor,
            6.0,
            self.theme.floor_fill,
            Stroke::new(1.0, self.theme.floor_stroke),
        );

        let pitch = self.config.floor_grid_pitch;
        // Skip the inner grid when lines would pile up
        if pitch <= 0.0 || pitch * transform.scale < 4.0 {
            return;
        }
        let stroke = Stroke::new(1.0, self.theme.floor_grid);

        let mut vx = pitch;
        while vx < layout.venue.width {
            let x = transform.to_screen(Pos2::new(vx, 0.0)).x;
            painter.draw_path(
                vec![Pos2::new(x, floor.min.y), Pos2::new(x, floor.max.y)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
            vx += pitch;
        }

        let mut vy = pitch;
        while vy < layout.venue.length {
            let y = transform.to_screen(Pos2::new(0.0, vy)).y;
            painter.draw_path(
                vec![Pos2::new(floor.min.x, y), Pos2::new(floor.max.x, y)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
            vy += pitch;
        }
    }

    fn object_style(&self, object: &LayoutObject, kind: ObjectKind) -> ObjectStyle {
        let mut style = kind.style();
        if let Some(fill) = object.color.as_deref().and_then(parse_hex_color) {
            style.fill = fill;
        }
        style
    }

    fn draw_object(
        &self,
        painter: &mut impl ScenePainter,
        object: &LayoutObject,
        transform: &ViewTransform,
        selected: bool,
    ) {
        let kind = ObjectKind::from_type(&object.kind);
        let style = self.object_style(object, kind);
        let frame = transform.frame_for(object);
        let stroke = Stroke::new(1.5, style.stroke);
        let pad = self.config.selection_padding;
        let selection = Stroke::new(2.0, self.theme.selection);

        match object.geometry() {
            ObjectGeometry::Circle { radius } => {
                let r = radius * transform.scale;
                let center = frame.to_screen(Vec2::ZERO);
                painter.draw_circle(center, r, style.fill, stroke);

                let seat_distance = r + self.config.seat_standoff;
                for i in 0..SEAT_COUNT {
                    let angle = i as f32 * std::f32::consts::TAU / SEAT_COUNT as f32;
                    painter.draw_circle(
                        frame.to_screen(Vec2::angled(angle) * seat_distance),
                        self.config.seat_radius,
                        style.stroke,
                        Stroke::NONE,
                    );
                }

                if selected {
                    painter.draw_circle(center, r + pad, Color32::TRANSPARENT, selection);
                }
            }
            ObjectGeometry::Rect { width, height } => {
                let size = Vec2::new(width, height) * transform.scale;
                self.draw_box(painter, &frame, Vec2::ZERO, size, style.fill, stroke);
                draw_glyph(painter, &frame, size, kind.glyph(), style.icon);

                if selected {
                    self.draw_box(
                        painter,
                        &frame,
                        Vec2::splat(-pad),
                        size + Vec2::splat(pad * 2.0),
                        Color32::TRANSPARENT,
                        selection,
                    );
                }
            }
        }
    }

    /// Local rect; rounded when axis aligned, a quad otherwise
    fn draw_box(
        &self,
        painter: &mut impl ScenePainter,
        frame: &LocalFrame,
        min: Vec2,
        size: Vec2,
        fill: Color32,
        stroke: Stroke,
    ) {
        if frame.is_rotated() {
            painter.draw_path(frame.quad(min, size), true, fill, stroke);
        } else {
            let rect = Rect::from_min_size(frame.to_screen(min), size);
            painter.draw_rect(rect, self.config.corner_radius, fill, stroke);
        }
    }

    fn draw_label(
        &self,
        painter: &mut impl ScenePainter,
        object: &LayoutObject,
        label: &str,
        transform: &ViewTransform,
        selected: bool,
    ) {
        let frame = transform.frame_for(object);
        let pos = match object.geometry() {
            ObjectGeometry::Circle { .. } => frame.anchor,
            ObjectGeometry::Rect { width, height } => {
                frame.to_screen(Vec2::new(width, height) * transform.scale / 2.0)
            }
        };

        let font = LabelFont {
            size: self.config.label_font_size,
            strong: selected,
        };
        let color = if selected {
            self.theme.label_selected
        } else {
            self.theme.label
        };

        painter.draw_text(
            pos,
            label,
            font,
            TextPaint::Halo(Stroke::new(HALO_WIDTH, self.theme.label_halo)),
        );
        painter.draw_text(pos, label, font, TextPaint::Fill(color));
    }
}

/// Draw `glyph` centered in a local box of `size`, scaled from the 24-unit icon box
fn draw_glyph(
    painter: &mut impl ScenePainter,
    frame: &LocalFrame,
    size: Vec2,
    glyph: Glyph,
    color: Color32,
) {
    let k = size.x.min(size.y) * ICON_FILL / ICON_BOX;
    if k <= 0.0 {
        return;
    }
    let center = size / 2.0;
    let at = |x: f32, y: f32| frame.to_screen(center + (Vec2::new(x, y) - Vec2::splat(ICON_BOX / 2.0)) * k);
    let stroke = Stroke::new((1.5 * k).clamp(1.0, 3.0), color);

    match glyph {
        Glyph::Podium => {
            painter.draw_path(
                vec![at(10.0, 4.0), at(14.0, 4.0), at(14.0, 18.0), at(10.0, 18.0)],
                true,
                color,
                Stroke::NONE,
            );
            painter.draw_path(vec![at(5.0, 20.0), at(19.0, 20.0)], false, Color32::TRANSPARENT, stroke);
        }
        Glyph::Storefront => {
            painter.draw_path(
                vec![at(5.0, 20.0), at(5.0, 9.0), at(19.0, 9.0), at(19.0, 20.0)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
            painter.draw_path(vec![at(3.0, 6.0), at(21.0, 6.0)], false, Color32::TRANSPARENT, stroke);
        }
        Glyph::Arrow => {
            painter.draw_path(vec![at(4.0, 12.0), at(19.0, 12.0)], false, Color32::TRANSPARENT, stroke);
            painter.draw_path(
                vec![at(13.0, 6.0), at(19.0, 12.0), at(13.0, 18.0)],
                false,
                Color32::TRANSPARENT,
                stroke,
            );
        }
        Glyph::Dot => {
            painter.draw_circle(at(12.0, 12.0), 3.0 * k, color, Stroke::NONE);
        }
        Glyph::None => {}
    }
}

/// Convenience wrapper around [`SceneRenderer::render`]
pub fn render_scene(
    painter: &mut impl ScenePainter,
    layout: Option<&LayoutData>,
    view: &ViewState,
    viewport: Rect,
    config: &ViewerConfig,
    theme: &FloorTheme,
) {
    SceneRenderer::new(config, theme).render(painter, layout, view, viewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floorplan::hit::hit_test;
    use crate::floorplan::model::Venue;
    use crate::floorplan::painter::{DrawCommand, RecordingPainter};

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    fn config() -> ViewerConfig {
        ViewerConfig {
            show_grid: false,
            ..Default::default()
        }
    }

    fn record(layout: Option<&LayoutData>, view: &ViewState) -> RecordingPainter {
        let mut painter = RecordingPainter::new();
        render_scene(&mut painter, layout, view, viewport(), &config(), &FloorTheme::dark());
        painter
    }

    fn scenario() -> LayoutData {
        LayoutData::new(Venue::new(100.0, 60.0, "ft")).with_object(
            LayoutObject::new("t1", "round-table", 50.0, 30.0)
                .with_radius(5.0)
                .with_label("Table 1"),
        )
    }

    #[test]
    fn test_empty_state() {
        let painter = record(None, &ViewState::default());
        assert_eq!(painter.commands.len(), 2);
        assert!(matches!(
            &painter.commands[1],
            DrawCommand::Text { text, .. } if text == EMPTY_STATE_MESSAGE
        ));
    }

    #[test]
    fn test_round_table_with_six_seats() {
        let data = scenario();
        let painter = record(Some(&data), &ViewState::default());
        let circles: Vec<_> = painter.circles().collect();
        // table + six seats, no selection ring
        assert_eq!(circles.len(), 1 + SEAT_COUNT);

        let DrawCommand::Circle { center, radius, .. } = circles[0] else {
            unreachable!()
        };
        assert!((*center - viewport().center()).length() < 1e-3);
        assert!((*radius - 5.0 * 7.2).abs() < 1e-3);

        let config = config();
        for seat in &circles[1..] {
            let DrawCommand::Circle { center: c, .. } = seat else {
                unreachable!()
            };
            let d = (*c - *center).length();
            assert!((d - (radius + config.seat_standoff)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_selection_outline_after_shape() {
        let data = scenario();
        let view = ViewState::default().select(Some("t1".into()));
        let painter = record(Some(&data), &view);

        let rings: Vec<usize> = painter
            .commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::Circle { fill, stroke, .. }
                if *fill == Color32::TRANSPARENT && stroke.color == FloorTheme::dark().selection))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rings.len(), 1);

        let body = painter
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Circle { radius, .. } if (*radius - 36.0).abs() < 1e-3))
            .unwrap();
        assert!(body < rings[0]);
    }

    #[test]
    fn test_label_halo_then_fill_after_shapes() {
        let data = scenario().with_object(LayoutObject::new("s", "stage", 0.0, 0.0).with_size(30.0, 10.0));
        let painter = record(Some(&data), &ViewState::default());

        let passes: Vec<_> = painter.texts("Table 1").collect();
        assert_eq!(passes.len(), 2);
        assert!(matches!(passes[0].1, DrawCommand::Text { paint: TextPaint::Halo(_), .. }));
        assert!(matches!(passes[1].1, DrawCommand::Text { paint: TextPaint::Fill(_), .. }));

        // The stage comes later in the array but its shape is still under the label
        let stage_shape = painter
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Rect { fill, .. } if *fill == ObjectKind::Stage.style().fill))
            .unwrap();
        assert!(stage_shape < passes[0].0);
    }

    #[test]
    fn test_selected_label_is_strong() {
        let data = scenario();
        let view = ViewState::default().select(Some("t1".into()));
        let painter = record(Some(&data), &view);
        let (_, fill) = painter.texts("Table 1").last().unwrap();
        let DrawCommand::Text { font, paint, .. } = fill else {
            unreachable!()
        };
        assert!(font.strong);
        assert_eq!(*paint, TextPaint::Fill(FloorTheme::dark().label_selected));
    }

    #[test]
    fn test_glyph_per_kind() {
        let venue = Venue::new(100.0, 60.0, "ft");
        let object_commands = |kind: &str| {
            let data = LayoutData::new(venue.clone())
                .with_object(LayoutObject::new("o", kind, 10.0, 10.0).with_size(20.0, 20.0));
            let painter = record(Some(&data), &ViewState::default());
            let floor_lines = {
                let empty = LayoutData::new(venue.clone());
                record(Some(&empty), &ViewState::default()).commands.len()
            };
            painter.commands[floor_lines..].to_vec()
        };

        let stage = object_commands("stage");
        assert_eq!(stage.len(), 3); // body, podium, baseline
        assert!(matches!(&stage[1], DrawCommand::Path { closed: true, .. }));

        let booth = object_commands("booth");
        assert_eq!(booth.len(), 3);
        assert!(matches!(&booth[1], DrawCommand::Path { points, closed: false, .. } if points.len() == 4));

        let entrance = object_commands("exit");
        assert_eq!(entrance.len(), 3);

        let other = object_commands("bar");
        assert_eq!(other.len(), 2);
        assert!(matches!(&other[1], DrawCommand::Circle { .. }));

        let square_table = object_commands("table");
        assert_eq!(square_table.len(), 1);
    }

    #[test]
    fn test_rotated_rect_draws_quad() {
        let data = LayoutData::new(Venue::new(100.0, 60.0, "ft")).with_object(
            LayoutObject::new("r", "booth", 20.0, 20.0)
                .with_size(10.0, 5.0)
                .with_rotation(30.0),
        );
        let painter = record(Some(&data), &ViewState::default());
        let quad = painter
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Path { points, closed: true, fill, .. }
                    if *fill == ObjectKind::Booth.style().fill => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(quad.len(), 4);

        // Every corner's interior neighbourhood hit-tests to the object
        let cx = quad.iter().map(|p| p.x).sum::<f32>() / 4.0;
        let cy = quad.iter().map(|p| p.y).sum::<f32>() / 4.0;
        for corner in &quad {
            let inward = Pos2::new(corner.x + (cx - corner.x) * 0.1, corner.y + (cy - corner.y) * 0.1);
            let hit = hit_test(inward, Some(&data), &ViewState::default(), viewport(), &config());
            assert_eq!(hit.as_deref(), Some("r"));
        }
    }

    #[test]
    fn test_color_override() {
        let mut obj = LayoutObject::new("c", "booth", 0.0, 0.0);
        obj.color = Some("#112233".into());
        let data = LayoutData::new(Venue::new(100.0, 60.0, "ft")).with_object(obj);
        let painter = record(Some(&data), &ViewState::default());
        assert!(painter.commands.iter().any(
            |c| matches!(c, DrawCommand::Rect { fill, .. } if *fill == Color32::from_rgb(0x11, 0x22, 0x33))
        ));
    }

    /// Rect commands painted with `fill`
    fn rects_with_fill(painter: &RecordingPainter, fill: Color32) -> Vec<Rect> {
        painter
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, fill: f, .. } if *f == fill => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_size_draws_ten_unit_square() {
        let data = LayoutData::new(Venue::new(100.0, 60.0, "ft"))
            .with_object(LayoutObject::new("s", "booth", 20.0, 10.0));
        let painter = record(Some(&data), &ViewState::default());

        // 720 / 100 = 7.2 px per unit, origin at (40, 84)
        let rects = rects_with_fill(&painter, ObjectKind::Booth.style().fill);
        assert_eq!(rects.len(), 1);
        let expected = Rect::from_min_size(Pos2::new(40.0 + 144.0, 84.0 + 72.0), Vec2::splat(72.0));
        assert!((rects[0].min - expected.min).length() < 1e-3);
        assert!((rects[0].size() - expected.size()).length() < 1e-3);
    }

    #[test]
    fn test_negative_radius_draws_square_like_hit_test() {
        let data = LayoutData::new(Venue::new(100.0, 60.0, "ft"))
            .with_object(LayoutObject::new("n", "round-table", 50.0, 30.0).with_radius(-10.0));
        let view = ViewState::default();
        let painter = record(Some(&data), &view);

        assert_eq!(painter.circles().count(), 0);
        let rects = rects_with_fill(&painter, ObjectKind::Table.style().fill);
        assert_eq!(rects.len(), 1);
        assert!((rects[0].size() - Vec2::splat(72.0)).length() < 1e-3);

        let config = config();
        assert_eq!(
            hit_test(rects[0].center(), Some(&data), &view, viewport(), &config).as_deref(),
            Some("n")
        );
        let outside = rects[0].left_center() - Vec2::new(20.0, 0.0);
        assert_eq!(hit_test(outside, Some(&data), &view, viewport(), &config), None);
    }

    #[test]
    fn test_background_grid_is_zoom_independent() {
        let grid_config = ViewerConfig::default();
        let data = scenario();
        let count = |view: &ViewState| {
            let mut painter = RecordingPainter::new();
            render_scene(&mut painter, Some(&data), view, viewport(), &grid_config, &FloorTheme::dark());
            painter
                .commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Path { stroke, .. } if stroke.color == FloorTheme::dark().grid_color))
                .count()
        };
        let base = count(&ViewState::default());
        assert_eq!(base, 39 + 29);
        assert_eq!(count(&ViewState::default().apply_zoom(2.0)), base);
    }
}
