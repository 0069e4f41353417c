use crate::builder::{write_aggregate, Builder};
use crate::icon::{icon_name, IconCompiler};
use crate::options::BuildOptions;
use crate::watcher::{FileWatcher, WatcherError};
use mercury_common::{IconError, IconResult, ManifestEntry};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum WatchError {
    #[error(transparent)]
    Build(#[from] IconError),

    #[error(transparent)]
    Watcher(#[from] WatcherError),
}

/// What a single change notification led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Not inside an icon directory, or hidden
    Ignored,
    /// The icon was recompiled
    Rebuilt(ManifestEntry),
    /// The icon directory no longer holds any variant
    Emptied { name: String },
}

/// Incremental rebuild state kept after the initial full build
pub struct WatchSession {
    options: BuildOptions,
    manifest: Vec<ManifestEntry>,
    /// Canonical form of the source root, as notify reports it
    canonical_src: Option<PathBuf>,
}

impl WatchSession {
    /// Run the initial full build. Its failure ends the session.
    pub async fn start(options: BuildOptions) -> IconResult<Self> {
        let report = Builder::new(options.clone()).run_full_build().await?;
        let canonical_src = tokio::fs::canonicalize(&options.src_dir).await.ok();

        Ok(Self {
            options,
            manifest: report.manifest,
            canonical_src,
        })
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Manifest as of the latest rebuild
    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.manifest
    }

    /// Icon directory a changed file belongs to, if any.
    ///
    /// Only files nested inside a direct child of the source root count.
    pub fn icon_dir_for(&self, changed: &Path) -> Option<PathBuf> {
        let relative = changed.strip_prefix(&self.options.src_dir).ok().or_else(|| {
            self.canonical_src
                .as_ref()
                .and_then(|root| changed.strip_prefix(root).ok())
        })?;

        let mut components = relative.components();
        let icon = match components.next()? {
            Component::Normal(name) => name.to_string_lossy().into_owned(),
            _ => return None,
        };
        let rest: Vec<_> = components.collect();

        let hidden = icon.starts_with('.')
            || rest.iter().any(|component| match component {
                Component::Normal(name) => name.to_string_lossy().starts_with('.'),
                _ => true,
            });
        if rest.is_empty() || hidden {
            return None;
        }

        Some(self.options.src_dir.join(icon))
    }

    /// Recompile the icon containing `changed`.
    ///
    /// With `reindex_on_change` the aggregate files are regenerated from the
    /// patched manifest; otherwise they stay as of the last full build.
    pub async fn handle_change(&mut self, changed: &Path) -> IconResult<ChangeOutcome> {
        let Some(icon_dir) = self.icon_dir_for(changed) else {
            debug!(path = %changed.display(), "Ignoring change outside icon directories");
            return Ok(ChangeOutcome::Ignored);
        };
        let Some(name) = icon_name(&icon_dir) else {
            return Ok(ChangeOutcome::Ignored);
        };

        info!(path = %changed.display(), icon = %name, "File changed");

        let compiler = IconCompiler::new(&self.options.compiler, &self.options.out_dir);
        let entry = compiler.compile_icon(&icon_dir).await?;
        if let Some(entry) = &entry {
            info!(icon = %name, sizes = ?entry.sizes, "Rebuild complete");
        }
        self.apply(&name, entry.clone());

        if self.options.reindex_on_change {
            write_aggregate(&self.options, &self.manifest).await?;
            info!(icons = self.manifest.len(), "Regenerated index");
        } else {
            debug!("Aggregate files left as of the last full build");
        }

        Ok(match entry {
            Some(entry) => ChangeOutcome::Rebuilt(entry),
            None => ChangeOutcome::Emptied { name },
        })
    }

    /// Process changes in arrival order until the channel closes.
    /// A failed rebuild is logged and the loop carries on.
    pub async fn run(&mut self, changes: &mut Receiver<PathBuf>) {
        while let Some(changed) = changes.recv().await {
            if let Err(e) = self.handle_change(&changed).await {
                error!(path = %changed.display(), error = %e, "Rebuild failed");
            }
        }
    }

    /// Patch the manifest for one icon, keeping it in discovery order
    fn apply(&mut self, name: &str, entry: Option<ManifestEntry>) {
        let position = self
            .manifest
            .binary_search_by(|existing| existing.name.as_str().cmp(name));
        match (position, entry) {
            (Ok(index), Some(entry)) => self.manifest[index] = entry,
            (Err(index), Some(entry)) => self.manifest.insert(index, entry),
            (Ok(index), None) => {
                self.manifest.remove(index);
            }
            (Err(_), None) => {}
        }
    }
}

/// Full build, then rebuild icons as their sources change until the
/// watcher shuts down.
pub async fn run_watch(options: BuildOptions) -> Result<(), WatchError> {
    let mut session = WatchSession::start(options).await?;
    let mut watcher = FileWatcher::new(&session.options().src_dir)?;

    info!(path = %session.options().src_dir.display(), "Watching for changes");

    session.run(watcher.changes()).await;
    Ok(())
}
