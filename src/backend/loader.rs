use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{self, Error};

const UTF8_BOM: &str = "\u{feff}";

/// A CSV file read fully into memory.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub text: String,
}

impl LoadedFile {
    /// File name without directory or extension, used as the export name.
    pub fn file_stem(&self) -> Option<String> {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
    }
}

/// Decodes file contents as UTF-8 text, dropping a leading byte order mark.
pub fn decode(bytes: Vec<u8>) -> error::Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| {
        Error::not_text(format!(
            "invalid UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        ))
    })?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

pub fn load_file(path: &Path) -> Result<LoadedFile> {
    let bytes = fs::read(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let len = bytes.len();
    let text = decode(bytes).with_context(|| format!("Failed to read {:?} as text", path))?;
    tracing::info!(path = %path.display(), bytes = len, "loaded csv file");
    Ok(LoadedFile {
        path: path.to_path_buf(),
        text,
    })
}
