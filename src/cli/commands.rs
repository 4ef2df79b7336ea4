use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fl", about = concat!("[#] focuslock v", env!("CARGO_PKG_VERSION"), " - stay on task"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different config directory (holds config.toml and session state)
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented config.toml
    Init(InitArgs),
    /// Show whether focus lock is on and for how long
    Status,
    /// Toggle focus lock (enabling asks for confirmation)
    Toggle(ToggleArgs),
    /// Print what focus lock blocks and what stays available
    Prompt,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Confirm enabling without asking
    #[arg(short, long)]
    pub yes: bool,
}
