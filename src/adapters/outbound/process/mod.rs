/// Process invocation adapter
pub mod system_runner;

pub use system_runner::SystemCommandRunner;
