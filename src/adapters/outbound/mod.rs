/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod controllers;
pub mod process;
