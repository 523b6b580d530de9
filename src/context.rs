use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (log every copied file and archive entry)
    pub verbose: bool,

    /// Path to the Cargo.toml manifest
    pub manifest_path: PathBuf,

    /// Project directory (directory containing Cargo.toml)
    pub project_dir: PathBuf,
}

impl Context {
    pub fn new(manifest_path: PathBuf, verbose: bool) -> Self {
        let project_dir = manifest_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            verbose,
            manifest_path,
            project_dir,
        }
    }
}
