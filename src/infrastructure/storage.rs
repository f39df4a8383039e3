use std::fs;
use std::path::Path;

/// Create the parent directory of `file` if it is missing.
pub fn ensure_parent_dir(file: &Path) -> std::io::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
