// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;

/// Write `contents` where `export.out` says: a file (parent dirs created)
/// or stdout. Returns the file path when one was written.
pub fn write_export(export: &ExportOptions, contents: &str) -> io::Result<Option<PathBuf>> {
    match &export.out {
        Some(path) => {
            let path = resolve_out_path(path, export.format.ext());
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(&path, contents)?;
            Ok(Some(path))
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(contents.as_bytes())?;
            out.flush()?;
            Ok(None)
        }
    }
}

/// A directory (existing, or hinted by a trailing separator) gets a
/// default `export.<ext>` file inside it.
pub fn resolve_out_path(p: &Path, ext: &str) -> PathBuf {
    if looks_like_dir_hint(p) || p.is_dir() {
        p.join(format!("export.{ext}"))
    } else {
        p.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
