//! Interactive Floor Plan Viewer
//!
//! egui widget around the scene renderer with:
//! - Pan (drag) and zoom (mouse wheel, toolbar, keyboard)
//! - Click-to-select objects
//! - Theme-aware canvas colors

use std::path::Path;

use eframe::egui::{self, Key, Pos2, Rect, Sense, Vec2};

use super::controller::{InteractionController, ViewState};
use super::loader::{load_layout, LoadError};
use super::model::{LayoutData, LayoutObject};
use super::painter::EguiPainter;
use super::renderer::SceneRenderer;
use super::theme_mapper::FloorTheme;
use super::transform::ViewTransform;
use crate::config::ViewerConfig;
use crate::theme::Theme;

/// Main floor plan viewer widget
pub struct FloorPlanViewer {
    /// Current plan, if any
    layout: Option<LayoutData>,

    /// Zoom, pan and selection
    controller: InteractionController,

    pub config: ViewerConfig,

    pub theme: FloorTheme,

    /// Show the zoom toolbar
    pub show_toolbar: bool,

    /// Surface rect from the last frame
    last_viewport: Rect,
}

impl Default for FloorPlanViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl FloorPlanViewer {
    pub fn new(config: ViewerConfig) -> Self {
        let theme = FloorTheme::from_theme(&Theme::from_choice(config.theme));
        Self {
            layout: None,
            controller: InteractionController::new(&config),
            config,
            theme,
            show_toolbar: true,
            last_viewport: Rect::NOTHING,
        }
    }

    /// Replace the plan. A selection that no longer exists is dropped.
    pub fn set_layout(&mut self, layout: Option<LayoutData>) {
        self.layout = layout;
        self.controller.retain_selection(self.layout.as_ref());
    }

    /// Load a plan from a JSON file, keeping the current one on error
    pub fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let layout = load_layout(path)?;
        self.set_layout(Some(layout));
        self.controller.reset_view();
        Ok(())
    }

    pub fn layout(&self) -> Option<&LayoutData> {
        self.layout.as_ref()
    }

    pub fn view_state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    /// The selected object, with its members
    pub fn selected(&self) -> Option<&LayoutObject> {
        self.controller.selected_object(self.layout.as_ref()?)
    }

    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = FloorTheme::from_theme(theme);
    }

    /// Venue coordinates under a screen position, using the last frame's viewport
    pub fn venue_pos(&self, screen: Pos2) -> Option<Pos2> {
        let layout = self.layout.as_ref()?;
        if !self.last_viewport.is_positive() {
            return None;
        }
        let view = self.controller.state();
        let transform = ViewTransform::compute(
            self.last_viewport,
            &layout.venue,
            view.scale,
            view.offset,
            self.config.viewport_padding,
        );
        Some(transform.to_venue(screen))
    }

    /// Main UI function
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;
        self.last_viewport = rect;

        self.handle_input(ui, &response, rect);

        let renderer = SceneRenderer::new(&self.config, &self.theme);
        renderer.render(
            &mut EguiPainter::new(&painter),
            self.layout.as_ref(),
            self.controller.state(),
            rect,
        );

        if self.show_toolbar {
            self.draw_toolbar(ui, rect);
        }

        response
    }

    /// Handle user input
    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, rect: Rect) {
        let (scroll, pressed, released, press_origin, latest) = ui.input(|i| {
            (
                i.smooth_scroll_delta.y,
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        // Zoom with scroll wheel
        if response.hovered() && scroll != 0.0 {
            self.controller.zoom_by(1.0 + scroll * 0.001);
        }

        if pressed && response.hovered() {
            if let Some(origin) = press_origin {
                self.controller.begin_pan(origin);
            }
        }

        if self.controller.is_panning() {
            if let Some(pos) = latest {
                self.controller.pan_to(pos);
            }
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        // Ends the gesture even when released outside the surface
        if released {
            if let Some(outcome) = self.controller.end_pan() {
                log::trace!("gesture ended: {:?}", outcome);
                // After a drag the controller ignores this click
                if let Some(pos) = latest {
                    self.controller
                        .handle_click(pos, self.layout.as_ref(), rect, &self.config);
                }
            }
        }

        // Keyboard shortcuts
        if response.hovered() || response.has_focus() {
            ui.input(|i| {
                if i.key_pressed(Key::Plus) || i.key_pressed(Key::Equals) {
                    self.controller.zoom_in();
                }
                if i.key_pressed(Key::Minus) {
                    self.controller.zoom_out();
                }
                if i.key_pressed(Key::Num0) || i.key_pressed(Key::F) {
                    self.controller.reset_view();
                }
                if i.key_pressed(Key::G) {
                    self.config.show_grid = !self.config.show_grid;
                }
                if i.key_pressed(Key::Escape) {
                    self.controller.clear_selection();
                }
            });
        }
    }

    /// Draw toolbar
    fn draw_toolbar(&mut self, ui: &mut egui::Ui, rect: Rect) {
        egui::Area::new(ui.id().with("floorplan_toolbar"))
            .fixed_pos(rect.min + Vec2::new(10.0, 10.0))
            .order(egui::Order::Foreground)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.small_button("+").on_hover_text("Zoom in (+)").clicked() {
                            self.controller.zoom_in();
                        }
                        if ui.small_button("−").on_hover_text("Zoom out (-)").clicked() {
                            self.controller.zoom_out();
                        }
                        if ui.small_button("⊞").on_hover_text("Reset view (0)").clicked() {
                            self.controller.reset_view();
                        }
                        if ui.small_button("▦").on_hover_text("Toggle grid (G)").clicked() {
                            self.config.show_grid = !self.config.show_grid;
                        }
                        ui.label(format!("{:.0}%", self.controller.state().scale * 100.0));
                    });
                });
            });
    }
}
