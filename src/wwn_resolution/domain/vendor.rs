use std::fmt;

use crate::shared::error::RaidError;
use crate::shared::Result;

/// Static lookup table mapping PCI vendor ids to known RAID vendors.
///
/// The ids are the 4-hex-digit vendor half of the bracketed `[vvvv:dddd]`
/// pair that `lspci -nn` prints for each device.
const VENDOR_IDS: &[(&str, Vendor)] = &[("13c1", Vendor::ThreeWare), ("1000", Vendor::Lsi)];

/// A hardware RAID controller vendor recognized by the tool.
///
/// Dispatch is polymorphic over vendor: each variant maps to a concrete
/// handler in the adapters layer. A variant existing here does not imply
/// its resolution logic is implemented (LSI is a placeholder handler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    ThreeWare,
    Lsi,
}

impl Vendor {
    /// Looks up a PCI vendor id in the static vendor table
    ///
    /// # Arguments
    /// * `vendor_id` - 4-hex-digit vendor id extracted from lspci output
    ///
    /// # Errors
    /// Returns `RaidError::UnknownVendor` if the id is not in the table.
    pub fn from_pci_id(vendor_id: &str) -> Result<Self> {
        let id = vendor_id.to_lowercase();
        VENDOR_IDS
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, vendor)| *vendor)
            .ok_or_else(|| {
                RaidError::UnknownVendor {
                    vendor_id: vendor_id.to_string(),
                }
                .into()
            })
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::ThreeWare => write!(f, "3WARE"),
            Vendor::Lsi => write!(f, "LSI"),
        }
    }
}
