use once_cell::sync::Lazy;
use regex::Regex;

use crate::ports::outbound::CommandRunner;
use crate::shared::error::RaidError;
use crate::shared::Result;
use crate::wwn_resolution::domain::Vendor;

/// First bracketed `[vendor:device]` hex pair on an lspci -nn line.
/// The bracketed PCI class code (`[0104]`) has no colon and never matches.
static PCI_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9A-Fa-f]{4}):[0-9A-Fa-f]{4}\]").expect("valid pci id regex"));

/// VendorDetector - identifies the installed RAID controller vendor
///
/// Scans `lspci -nn` output for a RAID-class device, extracts its PCI
/// vendor id, and maps it through the static vendor table. Only the first
/// matching device is considered: multi-controller systems are a documented
/// limitation, not a bug to fix.
pub struct VendorDetector;

impl VendorDetector {
    /// Detects the RAID controller vendor present on this system
    ///
    /// # Errors
    /// Returns an error if:
    /// - lspci cannot be invoked
    /// - No line of its output mentions a RAID device
    /// - The RAID line carries no bracketed `[vendor:device]` pair
    /// - The vendor id is not in the static vendor table
    pub fn detect<R: CommandRunner>(runner: &R) -> Result<Vendor> {
        let output = runner.run("lspci", &["-nn"])?;

        let raid_line = output
            .lines()
            .find(|line| line.contains("RAID"))
            .ok_or(RaidError::NoRaidDevice)?;

        let vendor_id = PCI_ID_RE
            .captures(raid_line)
            .map(|captures| captures[1].to_string())
            .ok_or(RaidError::NoRaidDevice)?;

        Vendor::from_pci_id(&vendor_id)
    }
}
