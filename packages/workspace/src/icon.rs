use mercury_common::{
    component_identifier, to_pascal_case, CompilerConfig, IconError, IconResult, ManifestEntry,
};
use mercury_compiler_react::{compile_variant, CompileOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Source variants of one icon directory, in configured size order
#[derive(Debug, Clone)]
pub struct IconSource {
    pub name: String,
    pub dir: PathBuf,
    pub is_colorful: bool,
    pub variants: Vec<(u32, String)>,
}

impl IconSource {
    /// Read every configured size present in `dir`.
    ///
    /// Missing files are skipped silently. Unreadable files are skipped with
    /// a warning so one bad variant never blocks the rest of the icon.
    pub async fn load(dir: &Path, name: &str, config: &CompilerConfig) -> Self {
        let mut variants = Vec::new();

        for &size in &config.sizes {
            let path = dir.join(config.source_file_name(size));
            match tokio::fs::read_to_string(&path).await {
                Ok(source) => variants.push((size, source)),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(
                        icon = %name,
                        size,
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable variant"
                    );
                }
            }
        }

        Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            is_colorful: config.is_colorful(name),
            variants,
        }
    }

    pub fn sizes(&self) -> Vec<u32> {
        self.variants.iter().map(|(size, _)| *size).collect()
    }
}

/// Compiles single icon directories into per-size component modules
pub struct IconCompiler<'a> {
    config: &'a CompilerConfig,
    out_dir: &'a Path,
}

impl<'a> IconCompiler<'a> {
    pub fn new(config: &'a CompilerConfig, out_dir: &'a Path) -> Self {
        Self { config, out_dir }
    }

    /// Compile every variant of the icon in `icon_dir`.
    ///
    /// Returns `None` when the directory holds no usable variant. Nothing is
    /// written in that case. Write failures are fatal.
    pub async fn compile_icon(&self, icon_dir: &Path) -> IconResult<Option<ManifestEntry>> {
        let Some(name) = icon_name(icon_dir) else {
            warn!(dir = %icon_dir.display(), "Icon directory has no usable name");
            return Ok(None);
        };

        info!(icon = %name, "Processing icon");

        let source = IconSource::load(icon_dir, &name, self.config).await;
        if source.variants.is_empty() {
            warn!(
                icon = %name,
                dir = %icon_dir.display(),
                extension = %self.config.source_extension,
                "No source variants found"
            );
            return Ok(None);
        }

        self.write_modules(&source).await.map(Some)
    }

    async fn write_modules(&self, source: &IconSource) -> IconResult<ManifestEntry> {
        let module_dir = self.out_dir.join("icons").join(&source.name);
        tokio::fs::create_dir_all(&module_dir)
            .await
            .map_err(|e| IconError::io(&module_dir, e))?;

        let pascal = to_pascal_case(&source.name);
        let options = CompileOptions::from(self.config);

        for (size, svg) in &source.variants {
            let identifier = component_identifier(&pascal, *size);
            let component =
                compile_variant(&identifier, svg, *size, source.is_colorful, options.clone());

            let path = self.out_dir.join(self.config.module_path(&source.name, *size));
            tokio::fs::write(&path, component.source_text)
                .await
                .map_err(|e| IconError::io(&path, e))?;

            debug!(component = %identifier, path = %path.display(), "Wrote component");
        }

        Ok(ManifestEntry::new(
            source.name.clone(),
            source.sizes(),
            source.is_colorful,
        ))
    }
}

/// Icon name from its directory, the final path component
pub fn icon_name(icon_dir: &Path) -> Option<String> {
    icon_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
