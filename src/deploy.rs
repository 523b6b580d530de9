use crate::context::Context;
use crate::files::FileEntry;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// Copy every entry into `dest_dir`, preserving its relative path and
/// overwriting existing files. The first failed directory creation or copy
/// aborts the whole step.
pub fn deploy(ctx: &Context, entries: &[FileEntry], dest_dir: &Path) -> Result<()> {
    for entry in entries {
        let dest_path = dest_dir.join(&entry.relative);

        if ctx.verbose {
            println!(
                "Copying {} to {}",
                entry.source.display(),
                dest_path.display()
            );
        }

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&entry.source, &dest_path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(source: PathBuf, relative: &str) -> FileEntry {
        FileEntry {
            source,
            relative: PathBuf::from(relative),
        }
    }

    fn ctx() -> Context {
        Context::new(PathBuf::from("Cargo.toml"), false)
    }

    #[test]
    fn deploys_preserving_relative_structure() {
        let tmp = tempfile::tempdir().unwrap();
        let src_a = tmp.path().join("MyMod.dll");
        let src_b = tmp.path().join("data.json");
        fs::write(&src_a, "binary").unwrap();
        fs::write(&src_b, "{}").unwrap();

        let dest = tmp.path().join("mods/MyMod");
        let entries = vec![
            entry(src_a, "MyMod.dll"),
            entry(src_b, "sub/data.json"),
        ];
        deploy(&ctx(), &entries, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("MyMod.dll")).unwrap(), "binary");
        assert_eq!(
            fs::read_to_string(dest.join("sub/data.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn redeploy_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("MyMod.dll");
        fs::write(&src, "v2").unwrap();

        let dest = tmp.path().join("mods/MyMod");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("MyMod.dll"), "v1").unwrap();
        fs::write(dest.join("leftover.txt"), "stale").unwrap();

        deploy(&ctx(), &[entry(src, "MyMod.dll")], &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("MyMod.dll")).unwrap(), "v2");
        // Leftovers from earlier runs are not cleaned up.
        assert!(dest.join("leftover.txt").exists());
    }

    #[test]
    fn missing_source_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("mods/MyMod");
        let entries = vec![entry(tmp.path().join("gone.dll"), "gone.dll")];

        assert!(deploy(&ctx(), &entries, &dest).is_err());
    }
}
