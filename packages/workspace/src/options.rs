use mercury_common::CompilerConfig;
use mercury_compiler_html::GalleryOptions;
use std::path::PathBuf;

/// File name of the serialized manifest in the output root
pub const MANIFEST_FILE: &str = "manifest.json";

/// File name of the type-declaration module in the output root
pub const DEFINITIONS_FILE: &str = "index.d.ts";

/// Everything a build or watch session needs, fixed at construction
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root holding one directory per icon
    pub src_dir: PathBuf,
    /// Output root; cleared on every full build
    pub out_dir: PathBuf,
    pub compiler: CompilerConfig,
    /// Regenerate the index, definitions, manifest and gallery after every
    /// incremental rebuild in watch mode. Off by default, which leaves them
    /// as of the last full build.
    pub reindex_on_change: bool,
    /// Emit the gallery page during full builds
    pub gallery: Option<GalleryOptions>,
}

impl BuildOptions {
    pub fn new(src_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            out_dir: out_dir.into(),
            compiler: CompilerConfig::default(),
            reindex_on_change: false,
            gallery: None,
        }
    }

    pub fn with_compiler(mut self, compiler: CompilerConfig) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn with_reindex_on_change(mut self, reindex: bool) -> Self {
        self.reindex_on_change = reindex;
        self
    }

    pub fn with_gallery(mut self, gallery: GalleryOptions) -> Self {
        self.gallery = Some(gallery);
        self
    }

    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(self.compiler.index_file_name())
    }

    pub fn definitions_path(&self) -> PathBuf {
        self.out_dir.join(DEFINITIONS_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }
}
