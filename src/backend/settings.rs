use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::editor::ViewMode;
use super::export::DEFAULT_FILE_NAME;

#[derive(PartialEq, Clone, Copy, Serialize, Deserialize, Debug, Default)]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::System, Theme::Dark, Theme::Light]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    #[serde(default)]
    pub start_mode: ViewMode,
    #[serde(default)]
    pub recent_files: Vec<String>,
    #[serde(default = "default_max_recent")]
    pub max_recent_files: usize,
}

fn default_font_size() -> f32 {
    14.0
}

fn default_row_height() -> f32 {
    24.0
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_max_recent() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            font_size: default_font_size(),
            row_height: default_row_height(),
            default_file_name: default_file_name(),
            start_mode: ViewMode::Raw,
            recent_files: Vec::new(),
            max_recent_files: default_max_recent(),
        }
    }
}

impl Settings {
    /// Location of `config.json` in the platform config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "csvflow").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Loads settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Malformed settings in {:?}", path))
    }

    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::warn!("Could not save settings: {:#}", e);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config dir {:?}", dir))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Moves `path` to the front of the recent files list.
    pub fn add_recent_file(&mut self, path: &str) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_string());
        self.recent_files.truncate(self.max_recent_files);
    }
}
