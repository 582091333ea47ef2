use serde::Deserialize;

/// One disk entry from `lshw -class disk -json` output.
///
/// lshw emits many more fields per disk; only the logical device name and
/// the bus-location string are consumed, so everything else is ignored
/// during deserialization. Both fields can be absent on some devices
/// (e.g. a disk with no assigned device node), hence the Options.
#[derive(Debug, Clone, Deserialize)]
pub struct DiskRecord {
    #[serde(default)]
    pub logicalname: Option<String>,
    #[serde(default)]
    pub businfo: Option<String>,
}

impl DiskRecord {
    /// Returns true if this record's logical name exactly equals `blockdev`
    pub fn matches(&self, blockdev: &str) -> bool {
        self.logicalname.as_deref() == Some(blockdev)
    }
}
