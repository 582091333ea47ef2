use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::RaidError;
use crate::shared::Result;

static BUSINFO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^scsi@(\d+):\d+\.(\d+)\.\d+").expect("valid businfo regex"));

/// A decomposed SCSI bus-location string.
///
/// lshw reports the attachment point of a controller-managed disk as
/// `scsi@<controller>:<bus>.<unit>.<lun>`. Only the controller and unit
/// indices are needed to address the disk through the controller CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLocation {
    pub controller: u32,
    pub unit: u32,
}

impl BusLocation {
    /// Parses a businfo string of the form `scsi@<controller>:<bus>.<unit>.<lun>`
    ///
    /// # Errors
    /// Returns `RaidError::BusinfoParse` if the string does not match the
    /// expected pattern.
    pub fn parse(businfo: &str) -> Result<Self> {
        let captures = BUSINFO_RE.captures(businfo).ok_or_else(|| RaidError::BusinfoParse {
            businfo: businfo.to_string(),
        })?;

        // The captured groups are all-digit by construction; the parses can
        // still overflow u32, which counts as a malformed businfo.
        let controller = captures[1].parse().map_err(|_| RaidError::BusinfoParse {
            businfo: businfo.to_string(),
        })?;
        let unit = captures[2].parse().map_err(|_| RaidError::BusinfoParse {
            businfo: businfo.to_string(),
        })?;

        Ok(Self { controller, unit })
    }
}
