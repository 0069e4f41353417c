use crate::icon::IconCompiler;
use crate::options::BuildOptions;
use mercury_common::{component_count, IconError, IconResult, ManifestEntry};
use mercury_compiler_html::{compile_gallery, CompileError};
use mercury_compiler_react::{compile_definitions, compile_index};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a full build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries for every icon that produced at least one component
    pub manifest: Vec<ManifestEntry>,
    /// Icon directories found under the source root
    pub discovered: usize,
}

impl BuildReport {
    pub fn compiled(&self) -> usize {
        self.manifest.len()
    }

    pub fn components(&self) -> usize {
        component_count(&self.manifest)
    }

    /// Directories that yielded no component
    pub fn skipped(&self) -> usize {
        self.discovered.saturating_sub(self.compiled())
    }
}

/// Runs full builds from a source root into a clean output root
pub struct Builder {
    options: BuildOptions,
}

impl Builder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Clear the output root, compile every icon directory and write the
    /// aggregate files.
    pub async fn run_full_build(&self) -> IconResult<BuildReport> {
        let BuildOptions {
            src_dir, out_dir, ..
        } = &self.options;

        info!(
            src = %src_dir.display(),
            out = %out_dir.display(),
            "Starting full build"
        );

        check_output_dir(src_dir, out_dir).await?;
        reset_output_dir(out_dir).await?;

        let icon_dirs = discover_icon_dirs(src_dir).await?;
        info!(count = icon_dirs.len(), "Discovered icon directories");

        let compiler = IconCompiler::new(&self.options.compiler, out_dir);
        let mut manifest = Vec::new();
        for icon_dir in &icon_dirs {
            if let Some(entry) = compiler.compile_icon(icon_dir).await? {
                manifest.push(entry);
            }
        }

        write_aggregate(&self.options, &manifest).await?;

        let report = BuildReport {
            manifest,
            discovered: icon_dirs.len(),
        };

        info!(
            icons = report.compiled(),
            components = report.components(),
            skipped = report.skipped(),
            "Build complete"
        );

        Ok(report)
    }
}

/// Refuse an output root that is, or contains, the source root.
///
/// Both sides are canonicalized, so `..` segments and symlinks resolve to
/// the directory that would actually be cleared.
async fn check_output_dir(src_dir: &Path, out_dir: &Path) -> IconResult<()> {
    // A missing output root holds nothing to clear
    let out = match tokio::fs::canonicalize(out_dir).await {
        Ok(out) => out,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(IconError::io(out_dir, e)),
    };
    let src = match tokio::fs::canonicalize(src_dir).await {
        Ok(src) => src,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(IconError::io(src_dir, e)),
    };

    if src.starts_with(&out) {
        return Err(IconError::Generic(format!(
            "Output directory {} would contain the source directory {}",
            out_dir.display(),
            src_dir.display()
        )));
    }

    Ok(())
}

/// Remove and recreate the output root
async fn reset_output_dir(out_dir: &Path) -> IconResult<()> {
    match tokio::fs::remove_dir_all(out_dir).await {
        Ok(()) => debug!(out = %out_dir.display(), "Cleared output directory"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(IconError::io(out_dir, e)),
    }

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| IconError::io(out_dir, e))
}

/// Immediate subdirectories of `src_dir`, sorted by name.
///
/// Hidden entries and plain files are skipped. Symlinks are followed.
pub async fn discover_icon_dirs(src_dir: &Path) -> IconResult<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(src_dir)
        .await
        .map_err(|e| IconError::io(src_dir, e))?;

    let mut dirs = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| IconError::io(src_dir, e))?
    {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_dir() => dirs.push(path),
            Ok(_) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable entry"),
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Write the index, type definitions, manifest and optional gallery for
/// `manifest`.
pub async fn write_aggregate(options: &BuildOptions, manifest: &[ManifestEntry]) -> IconResult<()> {
    let index_path = options.index_path();
    write_file(&index_path, compile_index(manifest, &options.compiler)).await?;

    let definitions_path = options.definitions_path();
    write_file(
        &definitions_path,
        compile_definitions(manifest, &options.compiler),
    )
    .await?;

    let manifest_path = options.manifest_path();
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    write_file(&manifest_path, json).await?;

    info!(
        index = %index_path.display(),
        components = component_count(manifest),
        "Generated index"
    );
    debug!(
        definitions = %definitions_path.display(),
        manifest = %manifest_path.display(),
        "Wrote definitions and manifest"
    );

    if let Some(gallery) = &options.gallery {
        let html = compile_gallery(manifest, gallery, &options.compiler).map_err(|e| match e {
            CompileError::Serialize(e) => IconError::Serialize(e),
        })?;

        if let Some(parent) = gallery.out_file.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| IconError::io(parent, e))?;
            }
        }
        write_file(&gallery.out_file, html).await?;

        info!(path = %gallery.out_file.display(), "Wrote gallery");
    }

    Ok(())
}

async fn write_file(path: &Path, contents: String) -> IconResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| IconError::io(path, e))
}
