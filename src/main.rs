//! Floorplan Studio - desktop viewer for venue floor plans

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui::{self, Color32, RichText, Vec2};

use floorplan_studio::floorplan::{parse_layout, FloorPlanViewer, LayoutObject, ObjectKind};
use floorplan_studio::{Theme, ThemeChoice, ViewerConfig};

const SAMPLE_LAYOUT: &str = include_str!("../assets/sample_venue.json");

#[derive(Parser, Debug)]
#[command(name = "floorplan-studio", version, about = "Interactive venue floor plan viewer")]
struct Args {
    /// Layout JSON file to open
    layout: Option<PathBuf>,

    /// Config file (defaults to ~/.config/floorplan-studio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the light theme regardless of config
    #[arg(long)]
    light: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::load(),
    };
    if args.light {
        config.theme = ThemeChoice::Light;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Floorplan Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Floorplan Studio",
        options,
        Box::new(move |cc| Ok(Box::new(FloorplanApp::new(cc, config, args.layout)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}

struct FloorplanApp {
    viewer: FloorPlanViewer,
    theme: Theme,
    /// Last load result shown in the status bar
    status: Option<(String, bool)>,
    show_details: bool,
}

impl FloorplanApp {
    fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig, layout: Option<PathBuf>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::from_choice(config.theme);
        theme.apply(&cc.egui_ctx);

        let mut app = Self {
            viewer: FloorPlanViewer::new(config),
            theme,
            status: None,
            show_details: true,
        };
        if let Some(path) = layout {
            app.open(path);
        }
        app
    }

    fn open(&mut self, path: PathBuf) {
        match self.viewer.load_file(&path) {
            Ok(()) => self.status = Some((format!("Opened {}", path.display()), false)),
            Err(e) => {
                log::error!("{}", e);
                self.status = Some((e.to_string(), true));
            }
        }
    }

    fn load_sample(&mut self) {
        match parse_layout(SAMPLE_LAYOUT) {
            Ok(layout) => {
                self.viewer.set_layout(Some(layout));
                self.viewer.controller_mut().reset_view();
                self.status = Some(("Loaded sample venue".to_string(), false));
            }
            Err(e) => self.status = Some((e.to_string(), true)),
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.theme = theme;
        self.theme.apply(ctx);
        self.viewer.set_theme(&self.theme);
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open…").clicked() {
                        ui.close_menu();
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Floor plan", &["json"])
                            .pick_file()
                        {
                            self.open(path);
                        }
                    }
                    if ui.button("Load Sample").clicked() {
                        self.load_sample();
                        ui.close_menu();
                    }
                    if ui.button("Close").clicked() {
                        self.viewer.set_layout(None);
                        self.status = None;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.viewer.config.show_grid, "Show Grid (G)");
                    ui.checkbox(&mut self.viewer.show_toolbar, "Show Toolbar");
                    ui.checkbox(&mut self.show_details, "Show Details");
                    ui.separator();
                    if ui.button("Reset View (0)").clicked() {
                        self.viewer.controller_mut().reset_view();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Theme", |ui| {
                    if ui.button("Dark (Default)").clicked() {
                        self.set_theme(ui.ctx(), Theme::dark());
                        ui.close_menu();
                    }
                    if ui.button("Light").clicked() {
                        self.set_theme(ui.ctx(), Theme::light());
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(layout) = self.viewer.layout() {
                    let venue = &layout.venue;
                    ui.label(format!(
                        "{} × {} {} | {} objects",
                        venue.width,
                        venue.length,
                        venue.unit,
                        layout.objects.len()
                    ));
                    ui.separator();
                    ui.label(format!("Zoom: {:.0}%", self.viewer.view_state().scale * 100.0));

                    if let Some(pos) = ctx
                        .pointer_hover_pos()
                        .and_then(|p| self.viewer.venue_pos(p))
                    {
                        ui.separator();
                        ui.label(format!("{:.1}, {:.1} {}", pos.x, pos.y, venue.unit));
                    }
                }

                if let Some((message, is_error)) = &self.status {
                    ui.separator();
                    let color = if *is_error { self.theme.error } else { self.theme.fg_dim };
                    ui.label(RichText::new(message).color(color));
                }
            });
        });
    }
}

impl eframe::App for FloorplanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);
        self.status_bar(ctx);

        if self.show_details {
            let selected = self.viewer.selected().cloned();
            egui::SidePanel::right("details_panel")
                .default_width(260.0)
                .show(ctx, |ui| match &selected {
                    Some(object) => details_ui(ui, object, &self.theme),
                    None => {
                        ui.heading("Details");
                        ui.separator();
                        ui.label(RichText::new("Click an object to see who is assigned to it.").color(self.theme.fg_dim));
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewer.ui(ui);
            });
    }
}

/// Detail panel for the selected object
fn details_ui(ui: &mut egui::Ui, object: &LayoutObject, theme: &Theme) {
    let kind = ObjectKind::from_type(&object.kind);
    ui.heading(object.label.as_deref().unwrap_or(&object.id));
    ui.label(RichText::new(format!("{} · {}", kind.name(), object.kind)).color(theme.fg_dim));
    ui.separator();

    if object.members.is_empty() {
        ui.label(RichText::new("No one assigned").color(theme.fg_dim));
        return;
    }

    ui.label(RichText::new(format!("Assigned ({})", object.members.len())).strong());
    egui::ScrollArea::vertical().show(ui, |ui| {
        for member in &object.members {
            ui.horizontal(|ui| {
                match member.image.as_deref() {
                    Some(uri) => {
                        ui.add(
                            egui::Image::new(uri)
                                .max_size(Vec2::splat(28.0))
                                .rounding(14.0),
                        );
                    }
                    None => {
                        let initial = member.name.chars().next().unwrap_or('?').to_uppercase().to_string();
                        ui.label(
                            RichText::new(initial)
                                .color(Color32::WHITE)
                                .background_color(theme.accent)
                                .monospace(),
                        );
                    }
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(&member.name).color(theme.fg_bright));
                    if let Some(role) = &member.role {
                        ui.label(RichText::new(role).small().color(theme.fg_dim));
                    }
                });
            });
            ui.add_space(4.0);
        }
    });
}
