//! uv process plumbing: command construction and exit-status translation.
//!
//! Everything that touches the external `uv` binary lives here, so the
//! operations in [`crate::launcher`] stay a readable description of the
//! launch flow.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Name of the package manager binary the launcher delegates to.
const UV: &str = "uv";

/// Locate the uv executable on `PATH`.
///
/// Falls back to the bare name when the lookup fails, so the resulting
/// spawn error is reported on the invocation that actually needed uv
/// rather than up front.
fn uv_executable() -> PathBuf {
    which::which(UV).unwrap_or_else(|_| PathBuf::from(UV))
}

/// Build the dependency sync invocation (`uv sync`).
#[must_use]
pub fn sync_command() -> Command {
    let mut cmd = Command::new(uv_executable());
    cmd.arg("sync");
    cmd
}

/// Build the script run invocation (`uv run python <script>`).
///
/// All three standard streams are inherited so the script is free to be
/// interactive.
#[must_use]
pub fn run_command(script: &str) -> Command {
    let mut cmd = Command::new(uv_executable());
    cmd.args(["run", "python"])
        .arg(script)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Translate a finished child's status into this process's exit code.
///
/// A normal exit keeps its code untouched. On Unix, death by signal maps to
/// `128 + signal`, the convention shells use for the same situation.
#[must_use]
pub fn propagated_exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Exit code for a uv invocation that could not be started at all.
///
/// Follows the shell convention: 127 when the command is missing, 126 when
/// it exists but cannot be executed.
#[must_use]
pub fn spawn_failure_exit_code(err: &io::Error) -> i32 {
    if err.kind() == io::ErrorKind::NotFound {
        127
    } else {
        126
    }
}
