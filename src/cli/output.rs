use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::model::{Feedback, Transition};
use crate::ops::duration::format_minutes;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StatusJson {
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_since: Option<DateTime<Utc>>,
    pub elapsed_minutes: i64,
}

#[derive(Serialize)]
pub struct ToggleJson {
    /// "prompt_dismissed", "engaged", "released" or "unchanged"
    pub result: &'static str,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_minutes: Option<i64>,
    pub feedback: Vec<Feedback>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn transition_name(transition: &Transition) -> &'static str {
    match transition {
        Transition::Unchanged => "unchanged",
        Transition::PromptOpened => "prompt_opened",
        Transition::PromptDismissed => "prompt_dismissed",
        Transition::Engaged { .. } => "engaged",
        Transition::Released { .. } => "released",
    }
}

pub fn toggle_to_json(transition: &Transition, feedback: Vec<Feedback>) -> ToggleJson {
    let (locked, locked_since, elapsed_minutes) = match *transition {
        Transition::Engaged { started_at } => (true, Some(started_at), None),
        Transition::Released {
            elapsed_minutes, ..
        } => (false, None, Some(elapsed_minutes)),
        _ => (false, None, None),
    };
    ToggleJson {
        result: transition_name(transition),
        locked,
        locked_since,
        elapsed_minutes,
        feedback,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

pub fn format_status(status: &StatusJson) -> String {
    match status.locked_since {
        Some(since) if status.locked => format!(
            "locked for {} (since {})",
            format_minutes(status.elapsed_minutes),
            since.with_timezone(&Local).format("%H:%M")
        ),
        _ if status.locked => "locked".to_string(),
        _ => "unlocked".to_string(),
    }
}

pub fn format_feedback(feedback: &Feedback) -> String {
    if feedback.detail.is_empty() {
        feedback.message.clone()
    } else {
        format!("{}: {}", feedback.message, feedback.detail)
    }
}
