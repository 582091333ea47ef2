/// WwnRequest - Internal request DTO for the WWN resolution use case
#[derive(Debug, Clone)]
pub struct WwnRequest {
    /// Logical block device name, e.g. "/dev/sdb"
    pub blockdev: String,
}

impl WwnRequest {
    pub fn new(blockdev: String) -> Self {
        Self { blockdev }
    }
}
