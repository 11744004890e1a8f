//! Hash list and SVG file I/O
//!
//! This module reads hash lists and writes rendered fingerprints to disk.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Extension of rendered fingerprint files
pub const SVG_EXTENSION: &str = "svg";

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Parse a hash list: one hash per line, blank lines and `#` comments skipped
pub fn parse_hash_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a hash list file
pub fn load_hash_list(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_hash_list(&text))
}

/// Get the output path for a hash
///
/// Format: `{dir}/{lowercase hash}.svg`
pub fn get_output_path(dir: impl AsRef<Path>, hash: &str) -> PathBuf {
    dir.as_ref()
        .join(format!("{}.{}", hash.to_ascii_lowercase(), SVG_EXTENSION))
}

/// Temporary file removed on drop unless released
///
/// Every exit path of a write either renames the file into place (and
/// releases the guard) or leaves the guard to delete it.
struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    fn acquire(target: &Path) -> io::Result<Self> {
        let mut name: OsString = target
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?
            .to_os_string();
        name.push(".tmp");

        Ok(Self {
            path: target.with_file_name(name),
            armed: true,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn release(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.armed {
            trace!(path = %self.path.display(), "removing temporary file");
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Save an SVG document atomically (temporary sibling file, then rename)
pub fn save_svg(path: impl AsRef<Path>, svg: &str) -> io::Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let guard = TempFileGuard::acquire(path)?;
    {
        let file = File::create(guard.path())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
    }
    fs::rename(guard.path(), path)?;
    guard.release();

    Ok(())
}
