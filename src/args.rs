use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the mod-deploy tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to Cargo.toml or directory containing it
    pub path: Option<PathBuf>,

    /// Mod name (overrides the manifest)
    pub name: Option<String>,

    /// Mod version, informational only (overrides the manifest)
    pub mod_version: Option<String>,

    /// Build output directory (overrides the manifest)
    pub target_dir: Option<PathBuf>,

    /// Force the deploy step on or off (None: use the manifest)
    pub deploy: Option<bool>,

    /// Root of the shared deployed-mods directory
    pub deploy_root: Option<PathBuf>,

    /// Force the zip step on or off (None: use the manifest)
    pub zip: Option<bool>,

    /// Destination zip file path
    pub zip_path: Option<PathBuf>,

    /// Semicolon-delimited extra project-relative paths to include
    pub include: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("mod-deploy")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Deploys and packages a mod's build output")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Path to Cargo.toml or directory containing it")
            )
            .arg(
                Arg::new("name")
                    .short('n')
                    .long("name")
                    .value_name("NAME")
                    .help("Mod name (default: package name from the manifest)")
            )
            .arg(
                Arg::new("mod-version")
                    .long("mod-version")
                    .value_name("VERSION")
                    .help("Mod version, informational only (default: package version)")
            )
            .arg(
                Arg::new("target-dir")
                    .short('t')
                    .long("target-dir")
                    .value_name("DIR")
                    .help("Build output directory containing the mod files")
            )
            .arg(
                Arg::new("deploy")
                    .long("deploy")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("no-deploy")
                    .help("Copy the mod into the deployed-mods directory")
            )
            .arg(
                Arg::new("no-deploy")
                    .long("no-deploy")
                    .action(ArgAction::SetTrue)
                    .help("Skip the deploy step even if the manifest enables it")
            )
            .arg(
                Arg::new("deploy-root")
                    .long("deploy-root")
                    .value_name("DIR")
                    .help("Root of the deployed-mods directory")
            )
            .arg(
                Arg::new("zip")
                    .long("zip")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("no-zip")
                    .help("Package the mod into a zip archive")
            )
            .arg(
                Arg::new("no-zip")
                    .long("no-zip")
                    .action(ArgAction::SetTrue)
                    .help("Skip the zip step even if the manifest enables it")
            )
            .arg(
                Arg::new("zip-path")
                    .long("zip-path")
                    .value_name("FILE")
                    .help("Destination zip file path")
            )
            .arg(
                Arg::new("include")
                    .short('i')
                    .long("include")
                    .value_name("PATHS")
                    .help("Semicolon-delimited extra project-relative files or directories")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        let tristate = |on: &str, off: &str| {
            if matches.get_flag(on) {
                Some(true)
            } else if matches.get_flag(off) {
                Some(false)
            } else {
                None
            }
        };

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            name: matches.get_one::<String>("name").cloned(),
            mod_version: matches.get_one::<String>("mod-version").cloned(),
            target_dir: matches.get_one::<String>("target-dir").map(PathBuf::from),
            deploy: tristate("deploy", "no-deploy"),
            deploy_root: matches.get_one::<String>("deploy-root").map(PathBuf::from),
            zip: tristate("zip", "no-zip"),
            zip_path: matches.get_one::<String>("zip-path").map(PathBuf::from),
            include: matches.get_one::<String>("include").cloned(),
        }
    }
}
