/// Mock implementations for testing
mod mock_command_runner;

pub use mock_command_runner::MockCommandRunner;
