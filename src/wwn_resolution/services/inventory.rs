use crate::ports::outbound::CommandRunner;
use crate::shared::error::RaidError;
use crate::shared::Result;
use crate::wwn_resolution::domain::DiskRecord;

/// DiskInventory - resolves a block device name to its bus location
///
/// Drives `lshw -class disk -json` and scans the parsed disk records for
/// the first one whose logical name matches the requested block device.
pub struct DiskInventory;

impl DiskInventory {
    /// Looks up the businfo string for the given block device
    ///
    /// # Arguments
    /// * `blockdev` - Logical device name, e.g. "/dev/sdb"
    ///
    /// # Errors
    /// Returns an error if:
    /// - lshw cannot be invoked
    /// - Its output cannot be parsed as a JSON record sequence
    /// - No record's logical name matches, or the matching record carries
    ///   no businfo field
    pub fn lookup_businfo<R: CommandRunner>(runner: &R, blockdev: &str) -> Result<String> {
        let output = runner.run("lshw", &["-class", "disk", "-json"])?;
        let records = Self::parse_records(&output)?;

        records
            .iter()
            .find(|record| record.matches(blockdev))
            .and_then(|record| record.businfo.clone())
            .ok_or_else(|| {
                RaidError::BlockdevNotFound {
                    blockdev: blockdev.to_string(),
                }
                .into()
            })
    }

    /// Parses lshw's disk listing into records.
    ///
    /// lshw emits a bare comma-separated sequence of JSON objects with no
    /// enclosing list, so the raw output is wrapped in array delimiters
    /// before parsing.
    fn parse_records(output: &str) -> Result<Vec<DiskRecord>> {
        let wrapped = format!("[{}]", output.trim());
        serde_json::from_str(&wrapped).map_err(|e| {
            RaidError::InventoryParse {
                details: e.to_string(),
            }
            .into()
        })
    }
}
