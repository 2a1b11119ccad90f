use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::{debug, trace};

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Join lines with a trailing newline after each one
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

/// Replace a file's contents with the given lines
pub fn write_lines_to_file<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    trace!("Writing {} lines to {}", lines.len(), path.display());
    fs::write(path, join_lines(lines))
        .with_context(|| format!("Failed to write file {}", path.display()))
}
