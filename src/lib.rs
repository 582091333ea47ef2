//! raidtool - query hardware RAID controllers across vendors
//!
//! This library resolves a block device name to its World Wide Name (WWN)
//! by detecting the installed RAID controller vendor and dispatching to a
//! vendor-specific handler that drives the vendor's management CLI.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`wwn_resolution`): Vendor table, bus-location and
//!   controller-output parsing, detection and inventory services
//! - **Application Layer** (`application`): Use cases, factories, and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use raidtool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let runner = SystemCommandRunner::new();
//! let use_case = ResolveWwnUseCase::new(runner);
//!
//! let response = use_case.execute(WwnRequest::new("/dev/sdb".to_string()))?;
//! println!("{}", response.wwn);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod shared;
pub mod wwn_resolution;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::controllers::{LsiHandler, ThreeWareHandler};
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::application::dto::{WwnRequest, WwnResponse};
    pub use crate::application::factories::HandlerFactory;
    pub use crate::application::use_cases::ResolveWwnUseCase;
    pub use crate::ports::outbound::{CommandRunner, WwnResolver};
    pub use crate::shared::error::{ExitCode, RaidError};
    pub use crate::shared::Result;
    pub use crate::wwn_resolution::domain::{BusLocation, DiskRecord, UnitInfo, Vendor};
    pub use crate::wwn_resolution::services::{DiskInventory, VendorDetector};
}
