use clap::Parser;
use focuslock::cli::commands::Cli;
use focuslock::cli::handlers;
use focuslock::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let dir = match handlers::resolve_config_dir(cli.config_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // A broken config still gets logging; the command itself reports the error
    let log_config = config_io::read_config(&dir)
        .map(|c| c.log)
        .unwrap_or_default();
    let log_guard = logging::init(&log_config, &dir);

    let result = match cli.command {
        // No subcommand → launch TUI
        None => focuslock::tui::run(&dir),
        Some(_) => handlers::dispatch(cli, &dir),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        drop(log_guard);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
