use crate::context::Context;
use crate::files::FileEntry;
use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::io;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Package every entry into a zip archive at `output_path`, overwriting any
/// existing archive. Entry names use forward slashes regardless of platform
/// and are nested under `inner_dir/` when one is given.
///
/// The first I/O error aborts the step; a partial archive may be left at
/// the destination.
pub fn create_zip(
    ctx: &Context,
    entries: &[FileEntry],
    output_path: &Path,
    inner_dir: Option<&str>,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        utils::ensure_dir(parent)?;
    }

    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        let name = entry_name(&entry.relative, inner_dir);

        if ctx.verbose {
            println!("Adding {} as {}", entry.source.display(), name);
        }

        zip.start_file(name.as_str(), options)?;
        let mut source = File::open(&entry.source)?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

/// Zip entry name for a relative path: forward slashes, optionally
/// prefixed with the inner directory
fn entry_name(relative: &Path, inner_dir: Option<&str>) -> String {
    let name = relative.to_string_lossy().replace('\\', "/");
    match inner_dir {
        Some(dir) => format!("{}/{}", dir, name),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(PathBuf::from("Cargo.toml"), false)
    }

    fn read_entry(archive_path: &Path, name: &str) -> String {
        let file = File::open(archive_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn nests_entries_under_inner_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let src_a = tmp.path().join("MyMod.dll");
        let src_b = tmp.path().join("data.json");
        fs::write(&src_a, "binary").unwrap();
        fs::write(&src_b, "{}").unwrap();

        let entries = vec![
            FileEntry {
                source: src_a,
                relative: PathBuf::from("MyMod.dll"),
            },
            FileEntry {
                source: src_b,
                relative: PathBuf::from("sub/data.json"),
            },
        ];

        let zip_path = tmp.path().join("dist/MyMod-1.0.0.zip");
        create_zip(&ctx(), &entries, &zip_path, Some("MyMod")).unwrap();

        assert_eq!(read_entry(&zip_path, "MyMod/MyMod.dll"), "binary");
        assert_eq!(read_entry(&zip_path, "MyMod/sub/data.json"), "{}");
    }

    #[test]
    fn no_inner_dir_keeps_relative_names() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "a").unwrap();

        let entries = vec![FileEntry {
            source: src,
            relative: PathBuf::from("a.txt"),
        }];

        let zip_path = tmp.path().join("out.zip");
        create_zip(&ctx(), &entries, &zip_path, None).unwrap();

        assert_eq!(read_entry(&zip_path, "a.txt"), "a");
    }

    #[test]
    fn overwrites_existing_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "fresh").unwrap();

        let zip_path = tmp.path().join("out.zip");
        fs::write(&zip_path, "not a zip").unwrap();

        let entries = vec![FileEntry {
            source: src,
            relative: PathBuf::from("a.txt"),
        }];
        create_zip(&ctx(), &entries, &zip_path, Some("MyMod")).unwrap();

        assert_eq!(read_entry(&zip_path, "MyMod/a.txt"), "fresh");
    }

    #[test]
    fn entry_names_use_forward_slashes() {
        assert_eq!(
            entry_name(&PathBuf::from("sub").join("b.txt"), Some("MyMod")),
            "MyMod/sub/b.txt"
        );
        assert_eq!(entry_name(Path::new("a.txt"), None), "a.txt");
    }
}
