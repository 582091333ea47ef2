use crate::shared::Result;

/// CommandRunner port for invoking external system utilities
///
/// This port abstracts the process invocations the application core depends
/// on (`lspci`, `lshw`, the controller management CLI). Every invocation is
/// synchronous: the call blocks until the child exits and the full standard
/// output has been captured. There is no streaming, no timeout, and no
/// cancellation.
///
/// Routing all command execution through this port lets tests supply canned
/// output without touching real system utilities.
pub trait CommandRunner {
    /// Runs the given program with the given arguments and captures stdout
    ///
    /// # Arguments
    /// * `program` - Name of the executable to invoke (e.g. "lspci")
    /// * `args` - Arguments passed to the program
    ///
    /// # Returns
    /// The complete standard output of the command as a UTF-8 string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program cannot be spawned (not installed, not executable)
    /// - The command exits with a non-zero status
    /// - The captured output is not valid UTF-8
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}
