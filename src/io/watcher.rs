use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::state::SESSION_FILE;

/// Events sent from the session watcher to the TUI event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// .session.json was written by someone (possibly us).
    Changed,
}

/// Watches the config directory for changes to the persisted lock flag.
pub struct SessionWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<SessionEvent>,
}

impl SessionWatcher {
    /// Start watching `dir`. Call `poll()` each tick.
    pub fn start(dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let Ok(event) = result else {
                    return;
                };
                if is_session_event(&event) {
                    let _ = tx.send(SessionEvent::Changed);
                }
            },
            Config::default(),
        )?;

        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        Ok(SessionWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking: true if the session file changed since the last poll.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while let Ok(SessionEvent::Changed) = self.rx.try_recv() {
            changed = true;
        }
        changed
    }
}

fn is_session_event(event: &Event) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
        _ => return false,
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().and_then(|n| n.to_str()) == Some(SESSION_FILE))
}
