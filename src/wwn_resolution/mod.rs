/// WWN resolution core - domain types and services
///
/// This module holds the vendor table, the parsers for the textual output
/// of the system utilities involved, and the services that combine them
/// with the command-runner port.
pub mod domain;
pub mod services;
