use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lock::Permission;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusConfig {
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Toggle shortcut, e.g. "ctrl+l". Default: see src/cli/handlers/init.rs
    #[serde(default = "default_shortcut")]
    pub shortcut: String,
    /// How long feedback messages stay on screen.
    #[serde(default = "default_feedback_duration_ms")]
    pub feedback_duration_ms: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        LockConfig {
            shortcut: default_shortcut(),
            feedback_duration_ms: default_feedback_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Remembered outcome of the one-time permission request.
    #[serde(default)]
    pub permission: Permission,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            enabled: true,
            permission: Permission::Default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Lets RUST_LOG override `level`.
    #[serde(default)]
    pub debug: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_shortcut() -> String {
    "ctrl+l".to_string()
}

fn default_feedback_duration_ms() -> u64 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A parsed keyboard shortcut such as `ctrl+shift+l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: char,
}

impl FromStr for Shortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut shortcut = Shortcut {
            ctrl: false,
            alt: false,
            shift: false,
            key: ' ',
        };
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (key_part, modifiers) = match parts.split_last() {
            Some(split) => split,
            None => return Err(format!("empty shortcut '{}'", s)),
        };
        for m in modifiers {
            match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => shortcut.ctrl = true,
                "alt" | "option" => shortcut.alt = true,
                "shift" => shortcut.shift = true,
                other => return Err(format!("unknown modifier '{}' in '{}'", other, s)),
            }
        }
        let mut chars = key_part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {
                shortcut.key = c.to_ascii_lowercase();
                Ok(shortcut)
            }
            _ => Err(format!("shortcut key must be a single letter or digit: '{}'", s)),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}
