//! External command capture.
//!
//! Both commands drvscout shells out to (`dmesg -k`, `lsmod`) go through
//! [`capture_stdout`]: run once, block until exit, keep stdout as text,
//! discard stderr. A missing binary and a non-zero exit are recoverable
//! outcomes for the callers and get their own error variants.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Why a captured command produced no usable output.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("`{command}` exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Run `program` with `args`, returning captured stdout on a zero exit.
///
/// No timeout is applied; a hang in the external command hangs the run.
pub fn capture_stdout(program: &str, args: &[&str]) -> Result<String, ExecError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ExecError::NotFound(program.to_string()),
            _ => ExecError::Launch {
                command: program.to_string(),
                source: err,
            },
        })?;

    if !output.status.success() {
        return Err(ExecError::Failed {
            command: program.to_string(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
