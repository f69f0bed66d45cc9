//! # padlaunch
//!
//! Launcher for the WalkingPad server scripts: a thin wrapper that syncs the
//! project's dependencies with uv and then hands the named script to uv's
//! managed Python.

pub mod cli;
pub mod launcher;
pub mod uv;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
