use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument-parse failures use clap's own exit code (2). Every application
/// failure maps to the same non-zero code: the error kinds are distinguished
/// by their messages on stderr, not by the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - WWN resolved and printed to stdout
    Success = 0,
    /// Application error (detection, inventory, controller CLI, parse errors)
    ApplicationError = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
        }
    }
}

/// Application-specific errors for WWN resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Every variant is terminal for the invocation: nothing is retried or
/// recovered from internally.
#[derive(Debug, Error)]
pub enum RaidError {
    #[error("Unknown RAID vendor id: {vendor_id}\n\n💡 Hint: Only 3ware (13c1) and LSI (1000) controllers are recognized")]
    UnknownVendor { vendor_id: String },

    #[error("Unable to find a RAID device\n\n💡 Hint: Please verify that a RAID-class controller is present in the lspci output")]
    NoRaidDevice,

    #[error("Could not find businfo for {blockdev}\n\n💡 Hint: Please verify that the block device appears in 'lshw -class disk' output")]
    BlockdevNotFound { blockdev: String },

    #[error("Failed to parse disk inventory output\nDetails: {details}")]
    InventoryParse { details: String },

    #[error("Unable to parse businfo '{businfo}': expected 'scsi@<controller>:<bus>.<unit>.<lun>'")]
    BusinfoParse { businfo: String },

    #[error("Unable to get wwn for '{businfo}': controller reported no units")]
    WwnNotResolved { businfo: String },

    #[error("Unexpected controller CLI output line: '{line}'")]
    UnitListingParse { line: String },

    #[error("Cannot retrieve wwn for raided blockdevs (unit type is '{unit_type}', expected 'SINGLE')")]
    RaidedDevice { unit_type: String },

    #[error("Command failed: {command}\nDetails: {details}")]
    CommandFailed { command: String, details: String },

    #[error("WWN resolution is not implemented for {vendor} controllers")]
    VendorNotImplemented { vendor: String },
}
