use crate::context::Context;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize)]
pub struct CargoToml {
    pub package: Package,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Metadata {
    #[serde(rename = "mod-deploy", default)]
    pub mod_deploy: Option<ModDeployConfig>,
}

/// Raw `[package.metadata.mod-deploy]` section. Every field is optional;
/// command-line flags fill in or override whatever is missing.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ModDeployConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "target-dir", default)]
    pub target_dir: Option<String>,

    #[serde(default)]
    pub deploy: Option<bool>,

    #[serde(rename = "deploy-root", default)]
    pub deploy_root: Option<String>,

    #[serde(default)]
    pub zip: Option<bool>,

    #[serde(rename = "zip-path", default)]
    pub zip_path: Option<String>,

    #[serde(default)]
    pub include: Option<String>,
}

/// Parsed and processed manifest information
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub target_dir: Option<PathBuf>,
    pub deploy: Option<bool>,
    pub deploy_root: Option<PathBuf>,
    pub zip: Option<bool>,
    pub zip_path: Option<PathBuf>,
    pub include: Option<String>,
}

impl Manifest {
    /// Load and parse the manifest from Cargo.toml
    pub fn load(ctx: &Context) -> Result<Self> {
        let content = fs::read_to_string(&ctx.manifest_path)?;
        let cargo_toml: CargoToml = toml::from_str(&content)?;

        // The metadata section is optional; flags can supply everything.
        let config = cargo_toml
            .package
            .metadata
            .and_then(|m| m.mod_deploy)
            .unwrap_or_default();

        let name = config.name.unwrap_or_else(|| cargo_toml.package.name.clone());
        let version = cargo_toml.package.version;

        // Relative paths in the manifest are resolved against the project
        // directory; $NAME and $VERSION are substituted first.
        let resolve = |raw: &str| ctx.project_dir.join(expand(raw, &name, &version));

        Ok(Manifest {
            target_dir: config.target_dir.as_deref().map(resolve),
            deploy: config.deploy,
            deploy_root: config.deploy_root.as_deref().map(resolve),
            zip: config.zip,
            zip_path: config.zip_path.as_deref().map(resolve),
            include: config.include,
            name,
            version,
        })
    }
}

/// Substitute `$NAME` and `$VERSION` references in a manifest value
fn expand(input: &str, name: &str, version: &str) -> String {
    input.replace("$NAME", name).replace("$VERSION", version)
}
