//! Subprocess execution

use std::process::Command;

use log::debug;

use crate::error::{InstallError, Result};

/// Run a command line to completion with inherited standard streams
pub trait ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<()>;
}

/// Runs commands with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<()> {
        let (program, args) = argv.split_first().ok_or_else(|| InstallError::ProcessFailed {
            command: String::new(),
            reason: "empty command line".to_string(),
        })?;

        let display = command_line(argv);
        debug!("running {}", display);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| InstallError::ProcessFailed {
                command: display.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::ProcessFailed {
                command: display,
                reason: format!("exited with {}", status),
            })
        }
    }
}

/// Render `argv` for logs, quoting arguments that contain spaces
pub fn command_line(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(' ') {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
