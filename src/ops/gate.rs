use serde::Serialize;

use crate::model::Shortcut;

/// Fixed content of the "enable focus lock" confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub title: String,
    /// Exit paths that stop working while locked.
    pub blocked: Vec<String>,
    /// Controls that keep working while locked.
    pub available: Vec<String>,
    /// The one way out.
    pub exit: String,
}

const BLOCKED: &[&str] = &[
    "Escape / close control",
    "Browser back and forward",
    "Page reload",
    "Closing the tab",
    "OS app-switch shortcuts (Alt+Tab, Cmd+Tab)",
    "Developer tools",
];

impl ConfirmationPrompt {
    pub fn new(shortcut: &Shortcut) -> Self {
        ConfirmationPrompt {
            title: "Enable Focus Lock?".to_string(),
            blocked: BLOCKED.iter().map(|s| s.to_string()).collect(),
            available: vec![
                "Navigating and completing tasks".to_string(),
                "Timer controls".to_string(),
                "Snooze and postpone".to_string(),
                format!("The lock toggle and its shortcut ({})", shortcut),
            ],
            exit: format!(
                "Press the lock toggle or {} again to disable Focus Lock.",
                shortcut
            ),
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\nThis will block:\n");
        for item in &self.blocked {
            out.push_str(&format!("  - {}\n", item));
        }
        out.push_str("\nStill available:\n");
        for item in &self.available {
            out.push_str(&format!("  - {}\n", item));
        }
        out.push('\n');
        out.push_str(&self.exit);
        out.push('\n');
        out
    }
}
