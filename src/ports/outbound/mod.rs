/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (system utilities, controller CLIs).
pub mod command_runner;
pub mod wwn_resolver;

pub use command_runner::CommandRunner;
pub use wwn_resolver::WwnResolver;
