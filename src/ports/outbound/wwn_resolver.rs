use crate::shared::Result;

/// WwnResolver port - the vendor-handler capability
///
/// A vendor handler knows how to turn a bus-location string (businfo, a
/// vendor-specific bus address like `scsi@1:0.2.0`) into the WWN of the
/// underlying physical disk by driving that vendor's controller management
/// CLI.
///
/// The framework is deliberately multi-vendor with partial coverage: a
/// vendor whose resolution logic has not been written yet still gets a
/// handler, one whose `resolve_wwn` returns a "not implemented" error
/// rather than the vendor being absent from dispatch entirely.
pub trait WwnResolver {
    /// Resolves the WWN for the disk at the given bus location
    ///
    /// # Arguments
    /// * `businfo` - Bus-location string from the disk inventory
    ///
    /// # Returns
    /// The WWN reported by the controller, verbatim
    ///
    /// # Errors
    /// Returns an error if the businfo cannot be parsed, the controller
    /// reports no units, the unit is part of a RAID array, or the
    /// controller CLI fails or produces unexpected output.
    fn resolve_wwn(&self, businfo: &str) -> Result<String>;
}
