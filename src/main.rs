mod archive;
mod args;
mod context;
mod deploy;
mod error;
mod files;
mod manifest;
mod options;
mod result;
mod utils;

use args::Args;
use context::Context;
use manifest::Manifest;
use options::Options;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Find Cargo.toml
    let manifest_path = utils::find_manifest(args.path.as_deref())?;

    // Create context
    let ctx = Context::new(manifest_path, args.verbose);

    // Use cliclack for nice UI
    cliclack::intro("mod-deploy")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Loaded manifest for {}", m.name));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    // Merge flags over the manifest and validate
    let Some(options) = Options::merge(&args, manifest)? else {
        cliclack::outro("Deploy and zip are both disabled, nothing to do")?;
        return Ok(());
    };

    // Enumerate the mod files once; both steps share the list
    let entries = {
        let spinner = cliclack::spinner();
        spinner.start("Collecting mod files...");
        match files::collect_mod_files(&ctx, &options) {
            Ok(entries) => {
                spinner.stop(format!("Collected {} mod files", entries.len()));
                entries
            }
            Err(e) => {
                spinner.error("Failed to collect mod files");
                return Err(e);
            }
        }
    };

    if let Some(deploy_root) = &options.deploy_root {
        let dest_dir = deploy_root.join(&options.mod_name);

        let spinner = cliclack::spinner();
        spinner.start(format!("Deploying to {}...", dest_dir.display()));
        deploy::deploy(&ctx, &entries, &dest_dir)?;
        spinner.stop(format!(
            "Deployed {} {} to {}",
            options.mod_name,
            options.mod_version,
            dest_dir.display()
        ));
    }

    if let Some(zip_path) = &options.zip_path {
        let spinner = cliclack::spinner();
        spinner.start(format!("Packaging {}...", zip_path.display()));
        archive::create_zip(&ctx, &entries, zip_path, Some(options.mod_name.as_str()))?;
        spinner.stop(format!("Packaged {}", zip_path.display()));
    }

    cliclack::outro("Mod deployed successfully!")?;
    Ok(())
}
