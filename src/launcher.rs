//! Launcher operations: dependency sync, script launch, script listing.

use crate::uv;
use std::fs;
use std::io;
use std::path::Path;
use std::process;

/// Sync the project's dependencies with uv.
///
/// The sync outcome is not consulted: uv prints its own diagnostics when
/// something fails, and the run step is attempted regardless.
pub fn sync_dependencies() {
    println!("Syncing dependencies with uv...");

    if let Err(err) = uv::sync_command().status() {
        report_spawn_failure(&err);
    }
}

/// Run a project script through uv and exit with the child's status.
///
/// The child inherits this process's terminal streams, so interactive
/// scripts behave as if they were started directly.
pub fn run_script(script: &str) -> ! {
    println!("Running {script} with uv...");

    match uv::run_command(script).status() {
        Ok(status) => process::exit(uv::propagated_exit_code(status)),
        Err(err) => {
            report_spawn_failure(&err);
            process::exit(uv::spawn_failure_exit_code(&err));
        }
    }
}

/// List the Python scripts in the working directory.
pub fn list_scripts() {
    let scripts = match collect_scripts(Path::new(".")) {
        Ok(scripts) => scripts,
        Err(err) => crate::fatal_error(&format!("Error reading directory: {err}")),
    };

    if scripts.is_empty() {
        println!("No Python scripts found in the current directory.");
    } else {
        println!("Available scripts:");
        for script in scripts {
            println!("  {script}");
        }
    }
}

/// Collect the `.py` file names in `dir`, sorted by name.
fn collect_scripts(dir: &Path) -> io::Result<Vec<String>> {
    let mut scripts = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path.extension().is_some_and(|ext| ext == "py")
            && let Some(name) = path.file_name().and_then(|name| name.to_str())
        {
            scripts.push(name.to_string());
        }
    }

    scripts.sort();
    Ok(scripts)
}

/// One-line stderr diagnostic for a uv invocation that could not start.
fn report_spawn_failure(err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        eprintln!("Error: uv not found. Please install from https://astral.sh/uv");
    } else {
        eprintln!("Error: failed to start uv: {err}");
    }
}
