use std::collections::HashMap;

use raidtool::prelude::*;

/// Mock CommandRunner for testing
///
/// Maps full command lines ("program arg1 arg2") to canned output, so the
/// whole resolution chain can run without any real system utilities.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    outputs: HashMap<String, String>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers canned output for a command line and returns self for chaining
    pub fn on(mut self, command_line: &str, output: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), output.to_string());
        self
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let key = format!("{} {}", program, args.join(" "));
        self.outputs.get(&key).cloned().ok_or_else(|| {
            anyhow::anyhow!("MockCommandRunner: no canned output for '{}'", key)
        })
    }
}
