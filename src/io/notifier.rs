use std::path::{Path, PathBuf};

use crate::io::config_io;
use crate::model::{FocusConfig, Notification, Permission};
use crate::ops::dispatch::{NotificationCapability, NotifyError};

/// Whether this build can show desktop notifications at all.
pub const BACKEND_AVAILABLE: bool = cfg!(feature = "desktop-notifications");

/// Desktop notifications via the platform notification daemon.
///
/// A terminal cannot show a permission dialog, so the request resolves
/// immediately: granted when a backend is compiled in, denied otherwise.
/// The outcome is remembered in config.toml.
pub struct DesktopNotifier {
    permission: Permission,
    config_dir: PathBuf,
}

impl DesktopNotifier {
    pub fn new(permission: Permission, config_dir: &Path) -> Self {
        DesktopNotifier {
            permission,
            config_dir: config_dir.to_path_buf(),
        }
    }
}

impl NotificationCapability for DesktopNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) {
        self.permission = if BACKEND_AVAILABLE {
            Permission::Granted
        } else {
            Permission::Denied
        };
        tracing::info!(permission = self.permission.as_str(), "notification permission resolved");
        if let Err(e) = config_io::save_permission(&self.config_dir, self.permission) {
            tracing::warn!(error = %e, "could not remember notification permission");
        }
    }

    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError> {
        if self.permission != Permission::Granted {
            return Err(NotifyError::PermissionDenied);
        }
        show(notification)
    }
}

#[cfg(feature = "desktop-notifications")]
fn show(notification: &Notification) -> Result<(), NotifyError> {
    notify_rust::Notification::new()
        .summary(&notification.title)
        .body(&notification.body)
        .appname("focuslock")
        .show()
        .map(|_| ())
        .map_err(|e| NotifyError::Dispatch(e.to_string()))
}

#[cfg(not(feature = "desktop-notifications"))]
fn show(_notification: &Notification) -> Result<(), NotifyError> {
    Err(NotifyError::Unavailable)
}

/// The notification capability for this config, or `None` when
/// notifications are switched off or unsupported by this build.
pub fn system_notifier(
    config: &FocusConfig,
    config_dir: &Path,
) -> Option<Box<dyn NotificationCapability>> {
    if !config.notifications.enabled || !BACKEND_AVAILABLE {
        return None;
    }
    Some(Box::new(DesktopNotifier::new(
        config.notifications.permission,
        config_dir,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn request_resolves_and_is_remembered() {
        let tmp = TempDir::new().unwrap();
        let mut notifier = DesktopNotifier::new(Permission::Default, tmp.path());

        notifier.request_permission();

        let expected = if BACKEND_AVAILABLE {
            Permission::Granted
        } else {
            Permission::Denied
        };
        assert_eq!(notifier.permission(), expected);
        let config = config_io::read_config(tmp.path()).unwrap();
        assert_eq!(config.notifications.permission, expected);
    }

    #[test]
    fn disabled_config_has_no_notifier() {
        let tmp = TempDir::new().unwrap();
        let mut config = FocusConfig::default();
        config.notifications.enabled = false;
        assert!(system_notifier(&config, tmp.path()).is_none());
    }

    #[test]
    fn notify_without_grant_is_refused() {
        let tmp = TempDir::new().unwrap();
        for permission in [Permission::Default, Permission::Denied] {
            let mut notifier = DesktopNotifier::new(permission, tmp.path());
            let result = notifier.notify(&Notification {
                title: "t".into(),
                body: "b".into(),
            });
            assert!(matches!(result, Err(NotifyError::PermissionDenied)));
        }
    }

    #[cfg(not(feature = "desktop-notifications"))]
    #[test]
    fn without_backend_dispatch_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let mut notifier = DesktopNotifier::new(Permission::Granted, tmp.path());
        let result = notifier.notify(&Notification {
            title: "t".into(),
            body: "b".into(),
        });
        assert!(matches!(result, Err(NotifyError::Unavailable)));
        assert!(system_notifier(&FocusConfig::default(), tmp.path()).is_none());
    }
}
