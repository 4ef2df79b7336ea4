mod init;
pub use init::cmd_init;

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Utc;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigError};
use crate::io::notifier;
use crate::io::state::{self, SessionState};
use crate::model::{Feedback, FocusConfig, Transition};
use crate::ops::clock::SystemClock;
use crate::ops::controller::{FocusLock, LockPorts, LockSettings};
use crate::ops::duration;
use crate::ops::gate::ConfirmationPrompt;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => Err("no subcommand given (run `fl` without arguments for the TUI)".into()),
        Some(cmd) => match cmd {
            Commands::Init(args) => cmd_init(args, dir),
            Commands::Status => cmd_status(dir, json),
            Commands::Toggle(args) => {
                let stdin = io::stdin();
                cmd_toggle(dir, args, json, &mut stdin.lock())
            }
            Commands::Prompt => cmd_prompt(dir, json),
        },
    }
}

/// Resolve the config directory from `-C` or the default location.
pub fn resolve_config_dir(flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match flag {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if !path.exists() {
                std::fs::create_dir_all(&path)
                    .map_err(|e| format!("cannot create -C path '{}': {}", dir, e))?;
            }
            Ok(std::fs::canonicalize(&path)
                .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?)
        }
        None => Ok(config_io::default_config_dir()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_settings(dir: &Path) -> Result<(FocusConfig, LockSettings), ConfigError> {
    let config = config_io::read_config(dir)?;
    let settings = LockSettings::from_config(&config).map_err(ConfigError::InvalidShortcut)?;
    Ok((config, settings))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_status(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = state::read_session(dir);
    let status = StatusJson {
        locked: session.locked,
        locked_since: session.locked_since,
        elapsed_minutes: duration::elapsed_minutes(Utc::now(), session.locked_since),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", format_status(&status));
    }
    Ok(())
}

fn cmd_prompt(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, settings) = load_settings(dir)?;
    let prompt = ConfirmationPrompt::new(&settings.shortcut);
    if json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
    } else {
        print!("{}", prompt.to_text());
    }
    Ok(())
}

/// Toggle the persisted lock. `input` answers the confirmation prompt
/// unless `--yes` was given.
fn cmd_toggle(
    dir: &Path,
    args: ToggleArgs,
    json: bool,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, settings) = load_settings(dir)?;
    let session = state::read_session(dir);

    let shown: Rc<RefCell<Vec<Feedback>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = shown.clone();
    let ports = LockPorts {
        clock: Box::new(SystemClock),
        notifier: notifier::system_notifier(&config, dir),
        feedback: Box::new(move |f: &Feedback| sink.borrow_mut().push(f.clone())),
    };
    let mut lock = FocusLock::restore(session.locked, session.locked_since, ports, settings);

    let changed = Rc::new(Cell::new(false));
    let flag = changed.clone();
    lock.on_lock_changed(move |_| flag.set(true));

    let mut transition = lock.toggle();
    if transition == Transition::PromptOpened {
        let confirmed = if args.yes {
            true
        } else {
            let prompt = lock.prompt().map(|p| p.to_text()).unwrap_or_default();
            ask_confirmation(&prompt, input)?
        };
        transition = if confirmed {
            lock.confirm()
        } else {
            lock.cancel()
        };
    }

    if changed.get() {
        state::write_session(
            dir,
            &SessionState::snapshot(lock.lock_started_at(), Utc::now()),
        )?;
    }

    let feedback = shown.borrow().clone();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&toggle_to_json(&transition, feedback))?
        );
    } else if transition == Transition::PromptDismissed {
        println!("cancelled; focus lock stays off");
    } else {
        for f in &feedback {
            println!("{}", format_feedback(f));
        }
    }
    Ok(())
}

/// Ask on stderr so `--json` output on stdout stays parseable.
fn ask_confirmation(prompt: &str, input: &mut dyn BufRead) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{}\nEnable? [y/N] ", prompt)?;
    stderr.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
