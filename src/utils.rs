use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Find Cargo.toml in the current directory or specified path
pub fn find_manifest(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    let manifest_path = if base_path.is_file() && base_path.file_name().unwrap() == "Cargo.toml" {
        base_path
    } else {
        base_path.join("Cargo.toml")
    };

    if !manifest_path.exists() {
        return Err(crate::error::Error::ManifestNotFound(
            manifest_path.display().to_string(),
        ));
    }

    Ok(manifest_path)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
