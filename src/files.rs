use crate::context::Context;
use crate::error::Error;
use crate::options::Options;
use crate::result::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single file scheduled for deployment: where it lives on disk and where
/// it goes relative to the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub source: PathBuf,
    pub relative: PathBuf,
}

/// Collect every file that makes up the mod, in deterministic order: the
/// build output directory first (walk order), then each include in listed
/// order.
///
/// Includes resolve against the project directory and contribute entries
/// relative to it, so a directory include keeps its directory name as a
/// prefix (`extra/sub/b.txt`, not `sub/b.txt`). Anything that does not
/// exist is skipped without error.
pub fn collect_mod_files(ctx: &Context, options: &Options) -> Result<Vec<FileEntry>> {
    let mut entries = files_under(&options.target_dir)?;

    for include in &options.include {
        let path = ctx.project_dir.join(include);
        if path.is_dir() {
            for entry in files_under(&path)? {
                entries.push(FileEntry {
                    source: entry.source,
                    relative: PathBuf::from(include).join(entry.relative),
                });
            }
        } else if path.is_file() {
            entries.push(FileEntry {
                source: path,
                relative: PathBuf::from(include),
            });
        } else if ctx.verbose {
            println!("Skipping missing include: {}", include);
        }
    }

    Ok(entries)
}

fn files_under(root: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|_| {
            Error::Custom(format!(
                "{} is outside of {}",
                entry.path().display(),
                root.display()
            ))
        })?;

        entries.push(FileEntry {
            source: entry.path().to_path_buf(),
            relative: relative.to_path_buf(),
        });
    }

    Ok(entries)
}
