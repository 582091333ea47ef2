use crate::ports::outbound::WwnResolver;
use crate::shared::error::RaidError;
use crate::shared::Result;
use crate::wwn_resolution::domain::Vendor;

/// LsiHandler - placeholder for LSI MegaRAID controllers
///
/// LSI controllers are recognized by the vendor detector, but their WWN
/// resolution logic has not been written. The handler exists so dispatch
/// reports "unimplemented capability" rather than "unknown vendor".
pub struct LsiHandler;

impl LsiHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LsiHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl WwnResolver for LsiHandler {
    fn resolve_wwn(&self, _businfo: &str) -> Result<String> {
        Err(RaidError::VendorNotImplemented {
            vendor: Vendor::Lsi.to_string(),
        }
        .into())
    }
}
