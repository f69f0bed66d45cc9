//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("padlaunch");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "padlaunch"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build padlaunch binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install a fake `uv` executable into `bin_dir`.
///
/// The fake appends each invocation's arguments to `uv_calls.log` in its
/// working directory, then exits with `sync_exit` for `uv sync` and
/// `run_exit` for `uv run ...`.
#[cfg(unix)]
pub fn install_fake_uv(bin_dir: &Path, sync_exit: i32, run_exit: i32) {
    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$*\" >> uv_calls.log\n\
         case \"$1\" in\n\
         sync) exit {sync_exit} ;;\n\
         run) exit {run_exit} ;;\n\
         esac\n\
         exit 0\n"
    );
    write_fake_uv(bin_dir, &script);
}

/// Install a fake `uv` with a custom script body.
#[cfg(unix)]
pub fn write_fake_uv(bin_dir: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir).unwrap();
    let path = bin_dir.join("uv");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Helper to run the launcher with `bin_dir` prepended to the child's PATH
pub fn launcher_command(binary: &Path, bin_dir: &Path) -> Command {
    let mut cmd = Command::new(binary);
    let mut paths = vec![bin_dir.to_path_buf()];
    if let Some(current) = env::var_os("PATH") {
        paths.extend(env::split_paths(&current));
    }
    cmd.env("PATH", env::join_paths(paths).unwrap());
    cmd
}

/// Helper to run the launcher with PATH reduced to `bin_dir` alone, so no
/// real `uv` can be found
pub fn launcher_command_isolated(binary: &Path, bin_dir: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env("PATH", bin_dir);
    cmd
}

/// Read the fake uv call log left in a test project directory
pub fn read_uv_calls(project_dir: &Path) -> Vec<String> {
    let log_path = project_dir.join("uv_calls.log");
    if !log_path.exists() {
        return Vec::new();
    }
    fs::read_to_string(log_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
