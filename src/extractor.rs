//! External extraction script invocation
//!
//! All actual subtitle work is delegated to a configured executable, invoked
//! as `<script> <target_path>`. The process runs to completion with no
//! timeout; exit status, stdout and stderr are captured in full.

use std::process::{Command, ExitStatus};

use crate::error::Result;

/// Outcome of one extraction script run
#[derive(Debug)]
pub struct ExtractionResult {
    /// Exit status of the script process
    pub status: ExitStatus,

    /// Full captured standard output
    pub stdout: String,

    /// Full captured standard error
    pub stderr: String,
}

impl ExtractionResult {
    /// Whether the script reported success (exit code 0)
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run the extraction script against `target_path`, blocking until it exits.
///
/// Both output streams are duplicated to the server log regardless of the
/// exit status. Errors here mean the process could not be started at all,
/// not that the script ran and failed.
pub fn run_script(script_path: &str, target_path: &str) -> Result<ExtractionResult> {
    tracing::info!("Executing script for path: {}", target_path);

    let output = Command::new(script_path).arg(target_path).output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    tracing::info!("Script stdout:\n{}", stdout);
    if !stderr.is_empty() {
        tracing::warn!("Script stderr:\n{}", stderr);
    }

    Ok(ExtractionResult {
        status: output.status,
        stdout,
        stderr,
    })
}
