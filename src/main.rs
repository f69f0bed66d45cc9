//! # padlaunch
//!
//! Launcher for the WalkingPad server scripts. Syncs the project's
//! dependencies with uv, then runs the requested script inside the managed
//! environment.
//!
//! ## Usage
//!
//! - Run a script: `padlaunch restserver.py`
//! - List the available scripts: `padlaunch --list`
//! - Show usage examples: `padlaunch`

/// Entry point for the CLI tool.
fn main() {
    padlaunch::cli::run_cli();
}
