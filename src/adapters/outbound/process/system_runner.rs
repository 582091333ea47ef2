use std::process::Command;

use crate::ports::outbound::CommandRunner;
use crate::shared::error::RaidError;
use crate::shared::Result;

/// SystemCommandRunner adapter - runs real system utilities
///
/// Implements the CommandRunner port on top of std::process::Command.
/// Each invocation spawns the program directly (no shell), blocks until it
/// exits, and returns the captured stdout. Stderr is captured only to
/// enrich error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command_line = format!("{} {}", program, args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|e| {
            RaidError::CommandFailed {
                command: command_line.clone(),
                details: e.to_string(),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RaidError::CommandFailed {
                command: command_line,
                details: format!("{}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            RaidError::CommandFailed {
                command: command_line,
                details: format!("output is not valid UTF-8: {}", e),
            }
            .into()
        })
    }
}
