//! Recording fakes for the lock controller's ports, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::model::{Feedback, Notification, Permission};
use crate::ops::dispatch::{FeedbackSink, NotificationCapability, NotifyError};

/// Notifier that records every dispatch. Clones share the same log.
#[derive(Clone)]
pub struct RecordingNotifier {
    permission: Rc<Cell<Permission>>,
    /// Permission the "user" picks when asked.
    answer: Permission,
    fail: bool,
    requests: Rc<Cell<u32>>,
    attempts: Rc<Cell<u32>>,
    sent: Rc<RefCell<Vec<Notification>>>,
    /// Shared event log; delivered notifications append `notify:<title>`.
    log: Option<Rc<RefCell<Vec<String>>>>,
}

impl RecordingNotifier {
    pub fn new(permission: Permission) -> Self {
        RecordingNotifier {
            permission: Rc::new(Cell::new(permission)),
            answer: Permission::Granted,
            fail: false,
            requests: Rc::new(Cell::new(0)),
            attempts: Rc::new(Cell::new(0)),
            sent: Rc::new(RefCell::new(Vec::new())),
            log: None,
        }
    }

    /// Also record deliveries in `log`, interleaved with other ports.
    pub fn logging_to(self, log: Rc<RefCell<Vec<String>>>) -> Self {
        RecordingNotifier {
            log: Some(log),
            ..self
        }
    }

    /// Granted, but every dispatch errors.
    pub fn failing() -> Self {
        RecordingNotifier {
            fail: true,
            ..Self::new(Permission::Granted)
        }
    }

    /// Undetermined permission; the request resolves to `answer`.
    pub fn answering(answer: Permission) -> Self {
        RecordingNotifier {
            answer,
            ..Self::new(Permission::Default)
        }
    }

    pub fn requests(&self) -> u32 {
        self.requests.get()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

impl NotificationCapability for RecordingNotifier {
    fn permission(&self) -> Permission {
        self.permission.get()
    }

    fn request_permission(&mut self) {
        self.requests.set(self.requests.get() + 1);
        self.permission.set(self.answer);
    }

    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.fail {
            return Err(NotifyError::Dispatch("daemon went away".into()));
        }
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("notify:{}", notification.title));
        }
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}

/// Feedback sink that keeps every message. Clones share the same log.
#[derive(Clone, Default)]
pub struct FeedbackLog {
    entries: Rc<RefCell<Vec<Feedback>>>,
}

impl FeedbackLog {
    pub fn entries(&self) -> Vec<Feedback> {
        self.entries.borrow().clone()
    }
}

impl FeedbackSink for FeedbackLog {
    fn show(&mut self, feedback: &Feedback) {
        self.entries.borrow_mut().push(feedback.clone());
    }
}
