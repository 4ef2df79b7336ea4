use crate::model::{Feedback, Notification, Permission, Shortcut};
use crate::ops::duration::format_minutes;

pub const ENABLED_TITLE: &str = "Focus Lock Enabled";
pub const DISABLED_TITLE: &str = "Focus Lock Disabled";

/// Why a notification could not be shown.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notifications are not available on this system")]
    Unavailable,
    #[error("notification permission denied")]
    PermissionDenied,
    #[error("notification dispatch failed: {0}")]
    Dispatch(String),
}

/// System notification capability (desktop notifier, browser API, ...).
pub trait NotificationCapability {
    fn permission(&self) -> Permission;
    /// Ask the user for permission. The outcome may arrive later and is
    /// only observed through subsequent `permission()` reads.
    fn request_permission(&mut self);
    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Sink for user-facing feedback messages.
pub trait FeedbackSink {
    fn show(&mut self, feedback: &Feedback);
}

impl<F: FnMut(&Feedback)> FeedbackSink for F {
    fn show(&mut self, feedback: &Feedback) {
        self(feedback)
    }
}

/// Fires best-effort notifications and feedback for lock transitions.
///
/// Notification failures are logged and dropped; feedback is always shown.
pub struct Dispatcher {
    notifier: Option<Box<dyn NotificationCapability>>,
    feedback: Box<dyn FeedbackSink>,
    shortcut: Shortcut,
    feedback_duration_ms: u64,
    permission_requested: bool,
}

impl Dispatcher {
    pub fn new(
        notifier: Option<Box<dyn NotificationCapability>>,
        feedback: Box<dyn FeedbackSink>,
        shortcut: Shortcut,
        feedback_duration_ms: u64,
    ) -> Self {
        Dispatcher {
            notifier,
            feedback,
            shortcut,
            feedback_duration_ms,
            permission_requested: false,
        }
    }

    /// Request notification permission if it is still undetermined.
    /// Only the first call can ever issue a request.
    pub fn request_permission_once(&mut self) {
        if self.permission_requested {
            return;
        }
        self.permission_requested = true;
        if let Some(notifier) = self.notifier.as_mut()
            && notifier.permission() == Permission::Default
        {
            tracing::debug!("requesting notification permission");
            notifier.request_permission();
        }
    }

    pub fn lock_engaged(&mut self) {
        let detail = format!(
            "Exit actions are blocked. Press {} to disable.",
            self.shortcut
        );
        self.try_notify(Notification {
            title: ENABLED_TITLE.to_string(),
            body: detail.clone(),
        });
        self.feedback.show(&Feedback {
            message: "Focus Lock enabled".to_string(),
            detail,
            display_duration_ms: self.feedback_duration_ms,
        });
    }

    pub fn lock_released(&mut self, elapsed_minutes: i64) {
        let duration = format_minutes(elapsed_minutes);
        self.try_notify(Notification {
            title: DISABLED_TITLE.to_string(),
            body: format!("Focus Lock was on for {}.", duration),
        });
        self.feedback.show(&Feedback {
            message: "Focus Lock disabled".to_string(),
            detail: format!("Locked for {}.", duration),
            display_duration_ms: self.feedback_duration_ms,
        });
    }

    fn try_notify(&mut self, notification: Notification) {
        let Some(notifier) = self.notifier.as_mut() else {
            return;
        };
        if notifier.permission() != Permission::Granted {
            tracing::debug!(title = %notification.title, "notification skipped: permission not granted");
            return;
        }
        if let Err(e) = notifier.notify(&notification) {
            tracing::warn!(title = %notification.title, error = %e, "notification failed");
        }
    }
}
