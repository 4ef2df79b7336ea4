use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the focus lock currently sits in its lifecycle.
///
/// The lock start time only exists inside `Locked`, so a locked phase
/// without a start time (or the reverse) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPhase {
    Unlocked,
    /// Enable was requested; the confirmation prompt is showing.
    PendingConfirmation,
    Locked { started_at: DateTime<Utc> },
}

impl LockPhase {
    /// Build the phase that mirrors an external lock flag.
    pub fn mirror(locked: bool, now: DateTime<Utc>) -> Self {
        if locked {
            LockPhase::Locked { started_at: now }
        } else {
            LockPhase::Unlocked
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, LockPhase::Locked { .. })
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            LockPhase::Locked { started_at } => Some(*started_at),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LockPhase::Unlocked => "unlocked",
            LockPhase::PendingConfirmation => "pending",
            LockPhase::Locked { .. } => "locked",
        }
    }
}

/// Tri-state system notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Not yet asked.
    #[default]
    Default,
    Granted,
    Denied,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Default => "default",
            Permission::Granted => "granted",
            Permission::Denied => "denied",
        }
    }
}

/// A system notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// A user-facing feedback message (toast / status line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub message: String,
    pub detail: String,
    pub display_duration_ms: u64,
}

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event had no effect in the current phase.
    Unchanged,
    /// Enable was requested and the confirmation prompt is now showing.
    PromptOpened,
    /// The prompt was cancelled; the lock stays off.
    PromptDismissed,
    /// A lock session began.
    Engaged { started_at: DateTime<Utc> },
    /// A lock session ended after `elapsed_minutes`.
    Released {
        started_at: DateTime<Utc>,
        elapsed_minutes: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn mirror_follows_flag() {
        let now = Utc.with_ymd_and_hms(2025, 5, 14, 9, 0, 0).unwrap();
        assert_eq!(LockPhase::mirror(false, now), LockPhase::Unlocked);
        assert_eq!(
            LockPhase::mirror(true, now),
            LockPhase::Locked { started_at: now }
        );
    }

    #[test]
    fn started_at_present_only_when_locked() {
        let now = Utc.with_ymd_and_hms(2025, 5, 14, 9, 0, 0).unwrap();
        assert_eq!(LockPhase::Unlocked.started_at(), None);
        assert_eq!(LockPhase::PendingConfirmation.started_at(), None);
        assert!(!LockPhase::PendingConfirmation.is_locked());
        let locked = LockPhase::Locked { started_at: now };
        assert!(locked.is_locked());
        assert_eq!(locked.started_at(), Some(now));
    }

    #[test]
    fn permission_serializes_lowercase() {
        assert_eq!(Permission::Granted.as_str(), "granted");
        let parsed: Permission = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(parsed, Permission::Default);
        assert!(serde_json::from_str::<Permission>("\"maybe\"").is_err());
        assert_eq!(
            serde_json::to_string(&Permission::Denied).unwrap(),
            "\"denied\""
        );
    }
}
