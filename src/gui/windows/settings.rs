use eframe::egui;

use crate::backend::editor::ViewMode;
use crate::backend::settings::{Settings, Theme};

pub struct SettingsWindow {
    selected_tab: SettingsTab,
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum SettingsTab {
    General,
    Theme,
}

impl Default for SettingsWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self {
            selected_tab: SettingsTab::General,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, open: &mut bool, settings: &mut Settings) {
        egui::Window::new("Settings")
            .open(open)
            .min_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.selected_tab, SettingsTab::General, "General");
                    ui.selectable_value(&mut self.selected_tab, SettingsTab::Theme, "Theme");
                });
                ui.separator();

                match self.selected_tab {
                    SettingsTab::General => self.show_general(ui, settings),
                    SettingsTab::Theme => self.show_theme(ui, settings),
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save Settings").clicked() {
                        settings.save();
                    }
                    if ui.button("Reset to Defaults").clicked() {
                        *settings = Settings::default();
                    }
                });
            });
    }

    fn show_general(&mut self, ui: &mut egui::Ui, settings: &mut Settings) {
        ui.heading("Export");
        ui.horizontal(|ui| {
            ui.label("Default file name:");
            ui.text_edit_singleline(&mut settings.default_file_name);
        });

        ui.separator();
        ui.heading("Startup");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut settings.start_mode, ViewMode::Raw, "Raw Input");
            ui.selectable_value(&mut settings.start_mode, ViewMode::Table, "Table Editor");
        });

        ui.separator();
        ui.heading("Recent Files");
        ui.add(egui::Slider::new(&mut settings.max_recent_files, 1..=20).text("Max Recent Files"));
        if ui.button("Clear Recent Files").clicked() {
            settings.recent_files.clear();
        }
    }

    fn show_theme(&mut self, ui: &mut egui::Ui, settings: &mut Settings) {
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(settings.theme.name())
            .show_ui(ui, |ui| {
                for theme in Theme::all() {
                    ui.selectable_value(&mut settings.theme, *theme, theme.name());
                }
            });

        ui.separator();
        ui.heading("Appearance");
        ui.add(egui::Slider::new(&mut settings.font_size, 10.0..=24.0).text("Font Size"));
        ui.add(egui::Slider::new(&mut settings.row_height, 20.0..=60.0).text("Row Height"));
    }
}
