use crate::args::Args;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use std::path::PathBuf;

/// Validated run configuration, merged from the manifest and command-line
/// flags. `deploy_root` and `zip_path` are `Some` only for enabled steps,
/// and at least one of them is set; construction fails on impossible
/// combinations instead of surfacing them mid-run.
#[derive(Debug, Clone)]
pub struct Options {
    pub mod_name: String,
    pub mod_version: String,

    /// Build output directory containing the mod files
    pub target_dir: PathBuf,

    /// Shared deployed-mods root; the mod lands at `<root>/<mod_name>`
    pub deploy_root: Option<PathBuf>,

    /// Destination zip file; entries are nested under `<mod_name>/`
    pub zip_path: Option<PathBuf>,

    /// Extra project-relative paths to include, in listed order
    pub include: Vec<String>,
}

impl Options {
    /// Merge command-line flags over manifest values and validate.
    ///
    /// Returns `Ok(None)` when both the deploy and zip steps are disabled;
    /// the run is then a successful no-op and nothing is validated further.
    pub fn merge(args: &Args, manifest: Manifest) -> Result<Option<Self>> {
        let deploy = args.deploy.or(manifest.deploy).unwrap_or(false);
        let zip = args.zip.or(manifest.zip).unwrap_or(false);

        if !deploy && !zip {
            return Ok(None);
        }

        let mod_name = args.name.clone().unwrap_or(manifest.name);
        if mod_name.trim().is_empty() {
            return Err(Error::InvalidOptions("mod name is empty".into()));
        }

        let mod_version = args.mod_version.clone().unwrap_or(manifest.version);

        let target_dir = args
            .target_dir
            .clone()
            .or(manifest.target_dir)
            .ok_or_else(|| Error::InvalidOptions("no build output directory given".into()))?;
        if !target_dir.is_dir() {
            return Err(Error::InvalidOptions(format!(
                "build output directory {} does not exist",
                target_dir.display()
            )));
        }

        let deploy_root = if deploy {
            let root = args
                .deploy_root
                .clone()
                .or(manifest.deploy_root)
                .filter(|p| !p.as_os_str().is_empty())
                .ok_or_else(|| {
                    Error::InvalidOptions("deploy is enabled but no deploy root is given".into())
                })?;
            Some(root)
        } else {
            None
        };

        let zip_path = if zip {
            let path = args
                .zip_path
                .clone()
                .or(manifest.zip_path)
                .filter(|p| !p.as_os_str().is_empty())
                .ok_or_else(|| {
                    Error::InvalidOptions("zip is enabled but no zip path is given".into())
                })?;
            Some(path)
        } else {
            None
        };

        let include = parse_include_list(
            args.include
                .as_deref()
                .or(manifest.include.as_deref())
                .unwrap_or(""),
        );

        Ok(Some(Options {
            mod_name,
            mod_version,
            target_dir,
            deploy_root,
            zip_path,
            include,
        }))
    }
}

/// Split a semicolon-delimited include list, trimming entries and dropping
/// empty ones. An empty or whitespace-only list yields no entries.
fn parse_include_list(raw: &str) -> Vec<String> {
    raw.trim()
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
