use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{FocusConfig, Permission, Shortcut};

pub const CONFIG_FILE: &str = "config.toml";

/// Commented config written by `fl init`, and the starting point for
/// any config.toml the program creates itself.
pub const CONFIG_TEMPLATE: &str = r##"# focuslock configuration

[lock]
# Key that toggles focus lock: [ctrl+][alt+][shift+]<letter or digit>
shortcut = "ctrl+l"
# How long feedback messages stay in the status row
feedback_duration_ms = 4000

[notifications]
# Desktop notifications on lock/unlock (needs a build with desktop-notifications)
enabled = true
# Remembered answer to the one-time permission request: default | granted | denied
permission = "default"

[log]
# Log filter written to focuslock.log next to this file
level = "info"
# Let RUST_LOG override the level
debug = false

[ui]
show_key_hints = true

# --- UI Customization ---
# Uncomment and edit to override defaults.
#
# [ui.colors]
# background = "#101418"
# text = "#C8D0D8"
# text_bright = "#F4F6F8"
# highlight = "#F2B134"
# dim = "#5C6773"
# locked = "#E5484D"      # alias: red
# unlocked = "#46A758"    # alias: green
"##;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not edit config.toml: {0}")]
    EditError(#[from] toml_edit::TomlError),
    #[error("invalid [lock] shortcut: {0}")]
    InvalidShortcut(String),
}

/// Default config directory, respecting XDG_CONFIG_HOME
pub fn default_config_dir() -> PathBuf {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    config_home.join("focuslock")
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Read config.toml from `dir`. A missing file yields the defaults.
pub fn read_config(dir: &Path) -> Result<FocusConfig, ConfigError> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(FocusConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: FocusConfig = toml::from_str(&text)?;
    config
        .lock
        .shortcut
        .parse::<Shortcut>()
        .map_err(ConfigError::InvalidShortcut)?;
    Ok(config)
}

/// Read config.toml as a toml_edit document for round-trip-safe editing.
/// A missing file yields the commented template.
pub fn read_config_doc(dir: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(CONFIG_TEMPLATE.parse::<toml_edit::DocumentMut>()?);
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(text.parse::<toml_edit::DocumentMut>()?)
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config_doc(dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    let path = config_path(dir);
    fs::create_dir_all(dir).map_err(|e| ConfigError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    fs::write(&path, doc.to_string()).map_err(|e| ConfigError::WriteError { path, source: e })
}

/// Update `[notifications].permission` in the config document
pub fn set_permission(doc: &mut toml_edit::DocumentMut, permission: Permission) {
    if !doc.contains_key("notifications") {
        doc["notifications"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["notifications"]["permission"] = toml_edit::value(permission.as_str());
}

/// Remember a permission outcome in config.toml.
pub fn save_permission(dir: &Path, permission: Permission) -> Result<(), ConfigError> {
    let mut doc = read_config_doc(dir)?;
    set_permission(&mut doc, permission);
    write_config_doc(dir, &doc)
}
