// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::Dataset;
use crate::error::ExportError;

/// Write the dataset to the path in `export`, replacing any previous file.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, dataset: &Dataset) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    write_export_to(&path, export, dataset)?;
    Ok(path)
}

pub fn write_export_to(path: &Path, export: &ExportOptions, dataset: &Dataset) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, dataset);
    fs::write(path, contents).map_err(|source| ExportError::Write { path: path.to_path_buf(), source })?;

    logf!("Export: Wrote {} row(s) → {}", dataset.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory { path: dir.to_path_buf() });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
