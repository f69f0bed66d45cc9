//! CLI argument parsing and the top-level launch flow.
//!
//! This module is separated from main.rs so the binary stays a one-line
//! delegate and the flow can live next to its unit tests.

use crate::launcher;
use clap::Parser as ClapParser;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage help printed when no script argument is given.
const USAGE: &str = "\
Usage: padlaunch <script.py>

Syncs project dependencies with uv, then runs the given script inside the
project environment.

Examples:
  padlaunch restserver.py
  padlaunch test_connection.py
  padlaunch test_uv_setup.py";

/// CLI arguments for the launcher.
#[derive(ClapParser)]
#[command(name = "padlaunch")]
#[command(version = PKG_VERSION)]
#[command(about = "Sync dependencies with uv, then run a WalkingPad server script", long_about = None)]
struct Cli {
    /// Script to run with uv after the dependency sync
    #[arg(value_name = "SCRIPT", allow_hyphen_values = true)]
    script: Option<String>,

    /// List the Python scripts in the working directory
    #[arg(short, long)]
    list: bool,
}

/// Parse arguments and drive the launcher.
pub fn run_cli() {
    let cli = Cli::parse();

    // Handle --list flag
    if cli.list {
        launcher::list_scripts();
        return;
    }

    // The sync step comes before the argument check: a bare `padlaunch`
    // still syncs, then prints usage.
    launcher::sync_dependencies();

    // An empty script argument counts as absent, like a shell's `[ -n "$1" ]`.
    match cli.script.as_deref() {
        Some(script) if !script.is_empty() => launcher::run_script(script),
        _ => println!("{USAGE}"),
    }
}
