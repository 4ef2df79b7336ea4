use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{self, ConfigError};
use crate::io::notifier;
use crate::io::state::{self, SessionState};
use crate::io::watcher::SessionWatcher;
use crate::model::{Feedback, FocusConfig, Shortcut};
use crate::ops::clock::{Clock, SystemClock};
use crate::ops::controller::{FocusLock, LockPorts, LockSettings};
use crate::ops::dispatch::{FeedbackSink, NotificationCapability};

use super::input;
use super::render;
use super::theme::Theme;

/// A feedback message and when it appeared
#[derive(Debug, Clone)]
pub struct Toast {
    pub feedback: Feedback,
    pub shown_at: Instant,
}

impl Toast {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < Duration::from_millis(self.feedback.display_duration_ms)
    }
}

/// Feedback sink backing the status row. Clones share the same slot;
/// a new message replaces the previous one.
#[derive(Clone, Default)]
pub struct StatusSink {
    current: Rc<RefCell<Option<Toast>>>,
}

impl FeedbackSink for StatusSink {
    fn show(&mut self, feedback: &Feedback) {
        *self.current.borrow_mut() = Some(Toast {
            feedback: feedback.clone(),
            shown_at: Instant::now(),
        });
    }
}

/// Main application state
pub struct App {
    pub lock: FocusLock,
    pub theme: Theme,
    pub shortcut: Shortcut,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    pub should_quit: bool,
    /// Where the session flag is persisted (None = don't persist)
    pub config_dir: Option<PathBuf>,
    feedback_duration_ms: u64,
    status: StatusSink,
    lock_changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(
        config: &FocusConfig,
        settings: LockSettings,
        clock: Box<dyn Clock>,
        notifier: Option<Box<dyn NotificationCapability>>,
        session: &SessionState,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let status = StatusSink::default();
        let shortcut = settings.shortcut;
        let feedback_duration_ms = settings.feedback_duration_ms;
        let mut lock = FocusLock::restore(
            session.locked,
            session.locked_since,
            LockPorts {
                clock,
                notifier,
                feedback: Box::new(status.clone()),
            },
            settings,
        );

        let lock_changed = Rc::new(Cell::new(false));
        let flag = lock_changed.clone();
        lock.on_lock_changed(move |_| flag.set(true));

        App {
            lock,
            theme: Theme::from_config(&config.ui),
            shortcut,
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            should_quit: false,
            config_dir,
            feedback_duration_ms,
            status,
            lock_changed,
        }
    }

    /// The feedback message to show, if it hasn't expired.
    pub fn status_toast(&self) -> Option<Feedback> {
        self.status
            .current
            .borrow()
            .as_ref()
            .filter(|t| t.is_live(Instant::now()))
            .map(|t| t.feedback.clone())
    }

    /// Show a message that isn't tied to a lock transition.
    pub fn set_status(&mut self, message: &str, detail: String) {
        self.status.show(&Feedback {
            message: message.to_string(),
            detail,
            display_duration_ms: self.feedback_duration_ms,
        });
    }

    /// Persist the lock flag if the last input changed it.
    pub fn after_input(&mut self) {
        if self.lock_changed.replace(false) {
            self.persist();
        }
    }

    fn persist(&mut self) {
        let Some(dir) = self.config_dir.clone() else {
            return;
        };
        let snapshot = SessionState::snapshot(self.lock.lock_started_at(), Utc::now());
        if let Err(e) = state::write_session(&dir, &snapshot) {
            tracing::warn!(error = %e, "could not save session state");
            self.set_status("Could not save session", e.to_string());
        }
    }

    /// Pick up a lock flag changed by another process (e.g. `fl toggle`).
    pub fn sync_from_disk(&mut self) {
        let Some(dir) = self.config_dir.as_deref() else {
            return;
        };
        let session = state::read_session(dir);
        self.lock.sync_external_at(session.locked, session.locked_since);
    }
}

/// Run the TUI application
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(dir)?;
    let settings = LockSettings::from_config(&config).map_err(ConfigError::InvalidShortcut)?;
    let session = state::read_session(dir);
    let notifier = notifier::system_notifier(&config, dir);

    let mut app = App::new(
        &config,
        settings,
        Box::new(SystemClock),
        notifier,
        &session,
        Some(dir.to_path_buf()),
    );

    let watcher = match SessionWatcher::start(dir) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "session watcher unavailable");
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&SessionWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Elapsed minutes are recomputed on every draw
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            app.after_input();
        }

        if watcher.is_some_and(|w| w.poll()) {
            app.sync_from_disk();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
