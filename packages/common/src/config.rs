use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pixel sizes compiled when nothing else is configured
pub const DEFAULT_SIZES: [u32; 3] = [16, 20, 24];

/// Default value of the generated components' `color` prop
pub const DEFAULT_COLOR: &str = "#FAFBFB";

/// Icon directories starting with this keep their literal fill colors
pub const DEFAULT_COLORFUL_PREFIX: &str = "colorful-";

/// Settings shared by every stage of the icon pipeline.
///
/// Orchestrators receive this at construction, so alternate size sets or
/// extensions never require touching the compilers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Supported pixel sizes, in the order variants are looked up
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    #[serde(default = "default_color")]
    pub default_color: String,

    #[serde(default = "default_colorful_prefix")]
    pub colorful_prefix: String,

    /// Extension of the size-variant source files
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of the generated component modules
    #[serde(default = "default_module_extension")]
    pub module_extension: String,
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_colorful_prefix() -> String {
    DEFAULT_COLORFUL_PREFIX.to_string()
}

fn default_source_extension() -> String {
    "svg".to_string()
}

fn default_module_extension() -> String {
    "js".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            default_color: default_color(),
            colorful_prefix: default_colorful_prefix(),
            source_extension: default_source_extension(),
            module_extension: default_module_extension(),
        }
    }
}

impl CompilerConfig {
    pub fn is_colorful(&self, icon_name: &str) -> bool {
        !self.colorful_prefix.is_empty() && icon_name.starts_with(&self.colorful_prefix)
    }

    /// File name of one size variant inside an icon directory, e.g. `24.svg`
    pub fn source_file_name(&self, size: u32) -> String {
        format!("{}.{}", size, self.source_extension)
    }

    /// Output path of a generated module, relative to the output root
    pub fn module_path(&self, icon_name: &str, size: u32) -> PathBuf {
        PathBuf::from("icons")
            .join(icon_name)
            .join(format!("{}.{}", size, self.module_extension))
    }

    /// Import specifier the aggregate index uses for a generated module
    pub fn module_specifier(&self, icon_name: &str, size: u32) -> String {
        format!("./icons/{}/{}.{}", icon_name, size, self.module_extension)
    }

    pub fn index_file_name(&self) -> String {
        format!("index.{}", self.module_extension)
    }
}
