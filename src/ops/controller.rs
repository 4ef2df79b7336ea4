use chrono::{DateTime, Utc};

use crate::model::{FocusConfig, LockPhase, Shortcut, Transition};
use crate::ops::clock::Clock;
use crate::ops::dispatch::{Dispatcher, FeedbackSink, NotificationCapability};
use crate::ops::duration;
use crate::ops::gate::ConfirmationPrompt;

/// External collaborators the lock controller talks to.
pub struct LockPorts {
    pub clock: Box<dyn Clock>,
    /// `None` when the platform has no notification capability.
    pub notifier: Option<Box<dyn NotificationCapability>>,
    pub feedback: Box<dyn FeedbackSink>,
}

/// Tunables taken from `[lock]` in config.toml.
#[derive(Debug, Clone)]
pub struct LockSettings {
    pub shortcut: Shortcut,
    pub feedback_duration_ms: u64,
}

impl LockSettings {
    pub fn from_config(config: &FocusConfig) -> Result<Self, String> {
        Ok(LockSettings {
            shortcut: config.lock.shortcut.parse()?,
            feedback_duration_ms: config.lock.feedback_duration_ms,
        })
    }
}

impl Default for LockSettings {
    fn default() -> Self {
        LockSettings {
            shortcut: Shortcut {
                ctrl: true,
                alt: false,
                shift: false,
                key: 'l',
            },
            feedback_duration_ms: 4000,
        }
    }
}

type LockListener = Box<dyn FnMut(bool)>;

/// The focus lock state machine.
///
/// Enabling goes through a confirmation prompt; disabling is one step.
/// Every confirmed transition runs, in order: duration calculation (on
/// release), state change, `on_lock_changed` listeners, a best-effort
/// system notification, then a feedback message.
pub struct FocusLock {
    phase: LockPhase,
    clock: Box<dyn Clock>,
    dispatcher: Dispatcher,
    prompt: ConfirmationPrompt,
    listeners: Vec<LockListener>,
}

impl FocusLock {
    /// Create a controller mirroring the caller's current lock flag.
    pub fn new(current_locked: bool, ports: LockPorts, settings: LockSettings) -> Self {
        let phase = LockPhase::mirror(current_locked, ports.clock.now());
        Self::start(phase, ports, settings)
    }

    /// Create a controller for a lock session the caller persisted,
    /// keeping its original start time.
    pub fn resume(started_at: DateTime<Utc>, ports: LockPorts, settings: LockSettings) -> Self {
        Self::start(LockPhase::Locked { started_at }, ports, settings)
    }

    /// Create a controller from a persisted flag and, when known, the
    /// start time that was saved with it.
    pub fn restore(
        locked: bool,
        started_at: Option<DateTime<Utc>>,
        ports: LockPorts,
        settings: LockSettings,
    ) -> Self {
        match (locked, started_at) {
            (true, Some(started_at)) => Self::resume(started_at, ports, settings),
            _ => Self::new(locked, ports, settings),
        }
    }

    fn start(phase: LockPhase, ports: LockPorts, settings: LockSettings) -> Self {
        let mut dispatcher = Dispatcher::new(
            ports.notifier,
            ports.feedback,
            settings.shortcut,
            settings.feedback_duration_ms,
        );
        dispatcher.request_permission_once();
        tracing::debug!(phase = phase.label(), "focus lock controller started");
        FocusLock {
            phase,
            clock: ports.clock,
            dispatcher,
            prompt: ConfirmationPrompt::new(&settings.shortcut),
            listeners: Vec::new(),
        }
    }

    /// Subscribe to confirmed lock changes. Called with the new flag,
    /// once per transition; never for the pending-confirmation step.
    pub fn on_lock_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn phase(&self) -> LockPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    pub fn lock_started_at(&self) -> Option<DateTime<Utc>> {
        self.phase.started_at()
    }

    pub fn prompt_visible(&self) -> bool {
        self.phase == LockPhase::PendingConfirmation
    }

    /// The confirmation prompt, while it is showing.
    pub fn prompt(&self) -> Option<&ConfirmationPrompt> {
        self.prompt_visible().then_some(&self.prompt)
    }

    /// Minutes locked so far, computed against the clock right now.
    pub fn elapsed_minutes(&self) -> i64 {
        duration::elapsed_minutes(self.clock.now(), self.phase.started_at())
    }

    /// The lock toggle (button or shortcut). Asks for confirmation when
    /// unlocked, releases immediately when locked.
    pub fn toggle(&mut self) -> Transition {
        match self.phase {
            LockPhase::Unlocked => {
                self.phase = LockPhase::PendingConfirmation;
                tracing::debug!("focus lock confirmation requested");
                Transition::PromptOpened
            }
            LockPhase::PendingConfirmation => Transition::Unchanged,
            LockPhase::Locked { started_at } => self.release(started_at),
        }
    }

    /// Accept the confirmation prompt. No-op when it is not showing.
    pub fn confirm(&mut self) -> Transition {
        if self.phase != LockPhase::PendingConfirmation {
            return Transition::Unchanged;
        }
        let started_at = self.clock.now();
        self.phase = LockPhase::Locked { started_at };
        tracing::info!(%started_at, "focus lock engaged");
        self.emit(true);
        self.dispatcher.lock_engaged();
        Transition::Engaged { started_at }
    }

    /// Dismiss the confirmation prompt. No-op when it is not showing.
    pub fn cancel(&mut self) -> Transition {
        if self.phase != LockPhase::PendingConfirmation {
            return Transition::Unchanged;
        }
        self.phase = LockPhase::Unlocked;
        tracing::debug!("focus lock confirmation cancelled");
        Transition::PromptDismissed
    }

    /// Observe the externally owned lock flag. Only a change of value
    /// does anything; it is mirrored without listeners or side effects.
    pub fn sync_external(&mut self, locked: bool) {
        self.sync_external_at(locked, None);
    }

    /// Like `sync_external`, for owners that persist the start time with
    /// the flag. A known start time that differs from ours replaces it,
    /// even when the flag itself did not change.
    pub fn sync_external_at(&mut self, locked: bool, started_at: Option<DateTime<Utc>>) {
        let next = match (locked, started_at) {
            (true, Some(at)) if self.phase.started_at() == Some(at) => return,
            (true, Some(at)) => LockPhase::Locked { started_at: at },
            _ if locked == self.phase.is_locked() => return,
            _ => LockPhase::mirror(locked, self.clock.now()),
        };
        self.phase = next;
        tracing::debug!(locked, started_at = ?self.phase.started_at(), "focus lock mirrored external flag");
    }

    fn release(&mut self, started_at: DateTime<Utc>) -> Transition {
        let elapsed_minutes = duration::elapsed_minutes(self.clock.now(), Some(started_at));
        self.phase = LockPhase::Unlocked;
        tracing::info!(elapsed_minutes, "focus lock released");
        self.emit(false);
        self.dispatcher.lock_released(elapsed_minutes);
        Transition::Released {
            started_at,
            elapsed_minutes,
        }
    }

    fn emit(&mut self, locked: bool) {
        for listener in &mut self.listeners {
            listener(locked);
        }
    }
}
