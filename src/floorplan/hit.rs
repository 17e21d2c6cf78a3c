//! Pointer Hit-Testing
//!
//! Resolves a surface position to the topmost layout object. Uses the same
//! [`ViewTransform`] and per-object [`LocalFrame`](super::transform::LocalFrame)
//! as the renderer, walking objects back to front.

use eframe::egui::{Pos2, Rect, Vec2};

use super::controller::ViewState;
use super::model::{LayoutData, LayoutObject, ObjectGeometry};
use super::transform::ViewTransform;
use crate::config::ViewerConfig;

/// Id of the topmost object under `pointer`, if any.
pub fn hit_test(
    pointer: Pos2,
    layout: Option<&LayoutData>,
    view: &ViewState,
    viewport: Rect,
    config: &ViewerConfig,
) -> Option<String> {
    let layout = layout?;
    let transform = ViewTransform::compute(
        viewport,
        &layout.venue,
        view.scale,
        view.offset,
        config.viewport_padding,
    );
    object_at(pointer, &layout.objects, &transform, config.selection_padding).map(|o| o.id.clone())
}

/// Topmost object in `objects` (last drawn wins) containing `pointer`.
pub fn object_at<'a>(
    pointer: Pos2,
    objects: &'a [LayoutObject],
    transform: &ViewTransform,
    selection_padding: f32,
) -> Option<&'a LayoutObject> {
    objects
        .iter()
        .rev()
        .find(|obj| contains(obj, pointer, transform, selection_padding))
}

/// Inside-test for a single object.
///
/// Circles accept anything within the selection outline; rectangles test the
/// pointer in the object's rotated local frame against its scaled size.
pub fn contains(
    object: &LayoutObject,
    pointer: Pos2,
    transform: &ViewTransform,
    selection_padding: f32,
) -> bool {
    let frame = transform.frame_for(object);
    match object.geometry() {
        ObjectGeometry::Circle { radius } => {
            let reach = radius * transform.scale + selection_padding;
            (pointer - frame.anchor).length_sq() <= reach * reach
        }
        ObjectGeometry::Rect { width, height } => {
            let local = frame.to_local(pointer);
            let size = Vec2::new(width, height) * transform.scale;
            local.x >= 0.0 && local.y >= 0.0 && local.x <= size.x && local.y <= size.y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floorplan::model::Venue;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    fn layout() -> LayoutData {
        LayoutData::new(Venue::new(100.0, 60.0, "ft"))
    }

    fn transform(data: &LayoutData, view: &ViewState) -> ViewTransform {
        ViewTransform::compute(viewport(), &data.venue, view.scale, view.offset, 40.0)
    }

    #[test]
    fn test_topmost_wins() {
        let data = layout()
            .with_object(LayoutObject::new("a", "booth", 10.0, 10.0).with_size(20.0, 20.0))
            .with_object(LayoutObject::new("b", "booth", 15.0, 15.0).with_size(20.0, 20.0));
        let view = ViewState::default();
        let t = transform(&data, &view);

        let overlap = t.to_screen(Pos2::new(20.0, 20.0));
        let only_a = t.to_screen(Pos2::new(11.0, 11.0));
        let config = ViewerConfig::default();

        assert_eq!(hit_test(overlap, Some(&data), &view, viewport(), &config).as_deref(), Some("b"));
        assert_eq!(hit_test(only_a, Some(&data), &view, viewport(), &config).as_deref(), Some("a"));
    }

    #[test]
    fn test_miss_and_empty() {
        let config = ViewerConfig::default();
        let view = ViewState::default();
        let data = layout().with_object(LayoutObject::new("a", "booth", 10.0, 10.0));

        assert_eq!(hit_test(Pos2::new(-500.0, -500.0), Some(&data), &view, viewport(), &config), None);
        assert_eq!(hit_test(Pos2::new(400.0, 300.0), Some(&layout()), &view, viewport(), &config), None);
        assert_eq!(hit_test(Pos2::new(400.0, 300.0), None, &view, viewport(), &config), None);
    }

    #[test]
    fn test_default_size_is_ten_units() {
        let config = ViewerConfig::default();
        let view = ViewState::default();
        let data = layout().with_object(LayoutObject::new("x", "unknown", 30.0, 20.0));
        let t = transform(&data, &view);

        let inside = t.to_screen(Pos2::new(39.5, 29.5));
        let outside = t.to_screen(Pos2::new(40.5, 25.0));
        assert_eq!(hit_test(inside, Some(&data), &view, viewport(), &config).as_deref(), Some("x"));
        assert_eq!(hit_test(outside, Some(&data), &view, viewport(), &config), None);
    }

    #[test]
    fn test_negative_radius_uses_default_square() {
        let config = ViewerConfig::default();
        let view = ViewState::default();
        let data = layout().with_object(LayoutObject::new("n", "round-table", 50.0, 30.0).with_radius(-10.0));
        let t = transform(&data, &view);
        let anchor = t.to_screen(Pos2::new(50.0, 30.0));

        // Left of the anchor would be inside a circle, but not inside the fallback square
        assert_eq!(hit_test(anchor - Vec2::new(60.0, 0.0), Some(&data), &view, viewport(), &config), None);
        let inside = t.to_screen(Pos2::new(55.0, 35.0));
        assert_eq!(hit_test(inside, Some(&data), &view, viewport(), &config).as_deref(), Some("n"));
    }

    #[test]
    fn test_circle_includes_selection_padding() {
        let config = ViewerConfig::default();
        let view = ViewState::default();
        let data = layout().with_object(LayoutObject::new("t", "table", 50.0, 30.0).with_radius(2.0));
        let t = transform(&data, &view);

        let center = t.to_screen(Pos2::new(50.0, 30.0));
        let edge = 2.0 * t.scale;
        let near = center + Vec2::new(edge + config.selection_padding - 0.5, 0.0);
        let far = center + Vec2::new(edge + config.selection_padding + 0.5, 0.0);
        assert!(contains(&data.objects[0], near, &t, config.selection_padding));
        assert!(!contains(&data.objects[0], far, &t, config.selection_padding));
    }

    #[test]
    fn test_rotated_rect() {
        let config = ViewerConfig::default();
        let view = ViewState::default();
        // 20 wide, 4 tall, turned to stand vertically below its anchor
        let data = layout().with_object(
            LayoutObject::new("r", "entrance", 50.0, 10.0)
                .with_size(20.0, 4.0)
                .with_rotation(90.0),
        );
        let t = transform(&data, &view);

        let below = t.to_screen(Pos2::new(48.0, 25.0));
        let right = t.to_screen(Pos2::new(65.0, 11.0));
        assert!(contains(&data.objects[0], below, &t, config.selection_padding));
        assert!(!contains(&data.objects[0], right, &t, config.selection_padding));
    }

    #[test]
    fn test_respects_pan_and_zoom() {
        let config = ViewerConfig::default();
        let data = layout().with_object(LayoutObject::new("a", "stage", 0.0, 0.0).with_size(10.0, 10.0));
        let view = ViewState::default()
            .apply_zoom(1.0)
            .apply_pan(Vec2::new(120.0, -40.0));
        let t = transform(&data, &view);

        let hit = t.to_screen(Pos2::new(5.0, 5.0));
        assert_eq!(hit_test(hit, Some(&data), &view, viewport(), &config).as_deref(), Some("a"));

        // Same screen point misses once the view is reset
        let reset = view.clone().reset();
        let t0 = transform(&data, &reset);
        assert!(!contains(&data.objects[0], hit, &t0, config.selection_padding));
    }
}
