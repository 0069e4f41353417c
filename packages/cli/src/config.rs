use anyhow::Context;
use mercury_common::CompilerConfig;
use mercury_compiler_html::GalleryOptions;
use mercury_workspace::BuildOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "mercury.config.json";

/// Mercury configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one subdirectory per icon
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory, cleared on every build
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(flatten)]
    pub compiler: CompilerConfig,

    /// Regenerate index files after each rebuild in watch mode
    #[serde(default)]
    pub reindex_on_change: bool,

    /// Gallery page settings; `null` disables the page
    #[serde(default = "default_gallery")]
    pub gallery: Option<GalleryOptions>,
}

fn default_src_dir() -> String {
    "all-icons".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_gallery() -> Option<GalleryOptions> {
    Some(GalleryOptions::default())
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config in {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Build options with every path resolved against `cwd`
    pub fn build_options(&self, cwd: &Path) -> BuildOptions {
        let mut options = BuildOptions::new(cwd.join(&self.src_dir), cwd.join(&self.out_dir))
            .with_compiler(self.compiler.clone())
            .with_reindex_on_change(self.reindex_on_change);

        if let Some(gallery) = &self.gallery {
            options = options.with_gallery(GalleryOptions {
                out_file: cwd.join(&gallery.out_file),
                ..gallery.clone()
            });
        }

        options
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            compiler: CompilerConfig::default(),
            reindex_on_change: false,
            gallery: default_gallery(),
        }
    }
}
