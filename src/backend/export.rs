use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";
pub const CSV_EXTENSION: &str = ".csv";
pub const DEFAULT_FILE_NAME: &str = "export";

/// Appends `.csv` unless the name already ends with it.
pub fn file_name_with_extension(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { DEFAULT_FILE_NAME } else { name };
    if name.ends_with(CSV_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, CSV_EXTENSION)
    }
}

/// Writes CSV text to `path` as UTF-8.
pub fn write_csv(path: &Path, content: &str) -> Result<()> {
    let output = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(output);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        mime = CSV_MIME_TYPE,
        "exported csv"
    );
    Ok(())
}

/// Saves CSV text in `dir` under the user-supplied name, returning the path written.
pub fn save_in_dir(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(file_name_with_extension(name));
    write_csv(&path, content)?;
    Ok(path)
}
