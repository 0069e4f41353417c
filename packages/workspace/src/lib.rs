pub mod builder;
pub mod icon;
pub mod options;
pub mod watch;
pub mod watcher;

pub use builder::{discover_icon_dirs, write_aggregate, BuildReport, Builder};
pub use icon::{icon_name, IconCompiler, IconSource};
pub use options::{BuildOptions, DEFINITIONS_FILE, MANIFEST_FILE};
pub use watch::{run_watch, ChangeOutcome, WatchError, WatchSession};
pub use watcher::{FileWatcher, WatcherError, WatcherResult};
