use std::path::Path;

use eframe::egui;

use crate::backend::editor::{Editor, ViewMode};
use crate::backend::error::Error;
use crate::backend::export;
use crate::backend::loader::{self, LoadedFile};
use crate::backend::settings::{Settings, Theme};
use crate::gui::table::render_table;
use crate::gui::windows::settings::SettingsWindow;

const PARSE_FAILED: &str = "Failed to parse CSV format.";
const RAW_PLACEHOLDER: &str = "id,name,value\n1,Item A,100\n2,Item B,200";

/// Top-level application state. Views get it by reference; nothing here
/// is global.
pub struct GuiApp {
    editor: Editor,
    settings: Settings,
    file_name: String,
    error: Option<String>,
    show_settings: bool,
    confirm_clear: bool,
    settings_window: SettingsWindow,
}

impl GuiApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: Settings,
        initial: Option<LoadedFile>,
        file_name: Option<String>,
    ) -> Self {
        let mut app = Self {
            editor: Editor::new(),
            file_name: settings.default_file_name.clone(),
            settings,
            error: None,
            show_settings: false,
            confirm_clear: false,
            settings_window: SettingsWindow::new(),
        };

        match initial {
            Some(file) => app.open_loaded(file),
            None => app.editor.switch_mode(app.settings.start_mode),
        }
        if let Some(name) = file_name {
            app.file_name = name;
        }
        app
    }

    fn open_loaded(&mut self, file: LoadedFile) {
        if let Some(stem) = file.file_stem() {
            self.file_name = stem;
        }
        self.editor = Editor::from_text(file.text);
        self.editor.switch_mode(self.settings.start_mode);
        self.error = None;
    }

    fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(file) => {
                self.settings.add_recent_file(&path.to_string_lossy());
                self.settings.save();
                self.open_loaded(file);
            }
            Err(e) => {
                tracing::error!("Failed to load {:?}: {:#}", path, e);
                self.error = Some(describe_load_error(&e));
            }
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
            self.load_path(&path);
        }
    }

    fn download(&mut self) {
        let content = self.editor.export_text();
        let suggested = export::file_name_with_extension(&self.file_name);
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(&suggested)
            .save_file()
        else {
            return;
        };

        let dir = path.parent().unwrap_or(Path::new("."));
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(suggested);
        match export::save_in_dir(dir, &name, &content) {
            Ok(_) => self.error = None,
            Err(e) => {
                tracing::error!("Failed to save {:?}: {:#}", path, e);
                self.error = Some(format!("Failed to save file: {:#}", e));
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("CSV-Flow").strong().size(18.0));
                ui.separator();
                ui.menu_button("File", |ui| {
                    if ui.button("Open").clicked() {
                        self.open_file_dialog();
                        ui.close();
                    }
                    let mut picked = None;
                    ui.menu_button("Open Recent", |ui| {
                        if self.settings.recent_files.is_empty() {
                            ui.label("No recent files");
                        }
                        for recent in &self.settings.recent_files {
                            if ui.button(recent.as_str()).clicked() {
                                picked = Some(recent.clone());
                                ui.close();
                            }
                        }
                    });
                    if let Some(recent) = picked {
                        self.load_path(Path::new(&recent));
                    }
                });
                if ui.button("Settings").clicked() {
                    self.show_settings = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = self.editor.mode();
                    if ui
                        .selectable_label(mode == ViewMode::Table, "Table Editor")
                        .clicked()
                    {
                        self.editor.switch_mode(ViewMode::Table);
                    }
                    if ui
                        .selectable_label(mode == ViewMode::Raw, "Raw Input")
                        .clicked()
                    {
                        self.editor.switch_mode(ViewMode::Raw);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn action_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("action_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Filename:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.file_name)
                        .hint_text("filename")
                        .desired_width(220.0),
                );
                ui.label(egui::RichText::new(".csv").monospace().color(egui::Color32::from_gray(130)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Download CSV").clicked() {
                        self.download();
                    }
                    if ui
                        .button(egui::RichText::new("Clear").color(egui::Color32::from_rgb(248, 113, 113)))
                        .clicked()
                    {
                        self.confirm_clear = true;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if self.show_settings {
            let mut open = true;
            self.settings_window.show(ctx, &mut open, &mut self.settings);
            if !open {
                self.show_settings = false;
            }
        }

        if self.confirm_clear {
            let mut open = true;
            let mut decision = None;
            egui::Window::new("Clear all data?")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to clear all data?");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Clear").clicked() {
                            decision = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            decision = Some(false);
                        }
                    });
                });

            match decision {
                Some(true) => {
                    self.editor.clear();
                    self.error = None;
                    self.confirm_clear = false;
                }
                Some(false) => self.confirm_clear = false,
                None if !open => self.confirm_clear = false,
                None => {}
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.first().and_then(|f| f.path.clone()) {
            self.load_path(&path);
        }
    }

    fn error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = &self.error else {
            return;
        };
        let mut dismiss = false;
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(60, 20, 24))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(message.as_str()).color(egui::Color32::from_rgb(252, 165, 165)));
                    if ui.small_button("Dismiss").clicked() {
                        dismiss = true;
                    }
                });
            });
        if dismiss {
            self.error = None;
        }
        ui.add_space(8.0);
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_style(ctx, &self.settings);

        self.menu_bar(ctx);
        self.action_bar(ctx);
        self.dialogs(ctx);
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.error_banner(ui);

            match self.editor.mode() {
                ViewMode::Raw => {
                    ui.label(egui::RichText::new("Paste your CSV content here:").color(egui::Color32::from_gray(150)));
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let size = ui.available_size();
                        let changed = self.editor.edit_raw(|raw| {
                            ui.add_sized(
                                size,
                                egui::TextEdit::multiline(raw)
                                    .code_editor()
                                    .hint_text(RAW_PLACEHOLDER),
                            )
                            .changed()
                        });
                        if changed {
                            self.error = None;
                        }
                    });
                }
                ViewMode::Table => {
                    ui.label(egui::RichText::new("Review and edit data:").color(egui::Color32::from_gray(150)));
                    render_table(ui, &mut self.editor, self.settings.row_height);
                }
            }
        });
    }
}

/// User-facing message for a failed load. Non-text input gets the generic
/// parse notice.
fn describe_load_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<Error>() {
        Some(Error::InvalidInputType { .. }) => PARSE_FAILED.to_string(),
        _ => format!("Failed to load file: {:#}", e),
    }
}

fn apply_style(ctx: &egui::Context, settings: &Settings) {
    match settings.theme {
        Theme::System => {
            ctx.set_visuals(egui::Visuals::default());
        }
        Theme::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.window_corner_radius = 8.0.into();
            visuals.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(15, 23, 42);
            ctx.set_visuals(visuals);
        }
        Theme::Light => {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    let size = settings.font_size;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => size * 1.4,
                egui::TextStyle::Small => size * 0.75,
                _ => size,
            };
        }
    });
}
