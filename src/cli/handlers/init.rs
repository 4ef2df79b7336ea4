use std::fs;
use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::config_io;

pub fn cmd_init(args: InitArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_io::config_path(dir);
    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    fs::create_dir_all(dir)?;
    fs::write(&path, config_io::CONFIG_TEMPLATE)?;
    println!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FocusConfig, Permission};

    #[test]
    fn template_parses_to_defaults() {
        let config: FocusConfig = toml::from_str(config_io::CONFIG_TEMPLATE).unwrap();
        let defaults = FocusConfig::default();
        assert_eq!(config.lock.shortcut, defaults.lock.shortcut);
        assert_eq!(
            config.lock.feedback_duration_ms,
            defaults.lock.feedback_duration_ms
        );
        assert_eq!(config.notifications.permission, Permission::Default);
        assert_eq!(config.log.level, defaults.log.level);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        cmd_init(InitArgs { force: false }, tmp.path()).unwrap();
        assert!(cmd_init(InitArgs { force: false }, tmp.path()).is_err());
        assert!(cmd_init(InitArgs { force: true }, tmp.path()).is_ok());
    }
}
