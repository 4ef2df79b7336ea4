pub mod config_io;
pub mod lock;
pub mod logging;
pub mod notifier;
pub mod state;
pub mod watcher;
