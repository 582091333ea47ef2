use crate::wwn_resolution::domain::Vendor;

/// WwnResponse - Result of the WWN resolution use case
#[derive(Debug, Clone)]
pub struct WwnResponse {
    /// The WWN reported by the controller, verbatim
    pub wwn: String,
    /// The detected controller vendor the resolution went through
    pub vendor: Vendor,
}

impl WwnResponse {
    pub fn new(wwn: String, vendor: Vendor) -> Self {
        Self { wwn, vendor }
    }
}
