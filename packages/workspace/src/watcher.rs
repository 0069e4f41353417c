use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::{channel, Receiver};
use tracing::warn;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    CreateError(#[from] notify::Error),
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Recursive watch over a source root, delivering changed file paths
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<PathBuf>,
}

impl FileWatcher {
    pub fn new(path: &Path) -> WatcherResult<Self> {
        let (tx, rx) = channel(CHANNEL_CAPACITY);
        let root = path.to_path_buf();

        // notify calls back on its own thread, outside the runtime
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    for changed in changed_files(&event, &root) {
                        if tx.blocking_send(changed).is_err() {
                            return;
                        }
                    }
                }
                Err(e) => warn!(error = %e, "File watcher error"),
            },
            Config::default(),
        )?;

        watcher.watch(path, RecursiveMode::Recursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    pub async fn next_change(&mut self) -> Option<PathBuf> {
        self.receiver.recv().await
    }

    /// Stream of changed paths; lives as long as the watcher
    pub fn changes(&mut self) -> &mut Receiver<PathBuf> {
        &mut self.receiver
    }
}

/// Paths an event reports as created or modified, minus hidden ones.
/// Removals are not reported.
pub fn changed_files(event: &Event, root: &Path) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => event
            .paths
            .iter()
            .filter(|path| !is_hidden(path, root))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// True when any component below `root` starts with a dot
pub fn is_hidden(path: &Path, root: &Path) -> bool {
    let hidden = |component: &OsStr| component.to_string_lossy().starts_with('.');

    match path.strip_prefix(root) {
        Ok(relative) => relative.iter().any(hidden),
        Err(_) => path.file_name().is_some_and(hidden),
    }
}
