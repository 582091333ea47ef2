use crate::application::dto::{WwnRequest, WwnResponse};
use crate::application::factories::HandlerFactory;
use crate::ports::outbound::CommandRunner;
use crate::shared::Result;
use crate::wwn_resolution::services::{DiskInventory, VendorDetector};

/// ResolveWwnUseCase - Core use case for WWN resolution
///
/// Orchestrates the full resolution chain using generic dependency
/// injection for the command runner:
/// 1. Detect the RAID controller vendor (lspci scan)
/// 2. Look up the block device's bus location (lshw inventory)
/// 3. Create the vendor handler via the factory
/// 4. Resolve the WWN through the handler
///
/// Any step's failure aborts the whole chain. Nothing is retried and no
/// partial result is ever produced.
pub struct ResolveWwnUseCase<R> {
    runner: R,
}

impl<R> ResolveWwnUseCase<R>
where
    R: CommandRunner + Clone + 'static,
{
    /// Creates a new ResolveWwnUseCase with the injected command runner
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Executes the WWN resolution use case
    ///
    /// # Arguments
    /// * `request` - Resolution request naming the block device
    ///
    /// # Returns
    /// WwnResponse carrying the resolved WWN and the detected vendor
    pub fn execute(&self, request: WwnRequest) -> Result<WwnResponse> {
        let vendor = VendorDetector::detect(&self.runner)?;
        let businfo = DiskInventory::lookup_businfo(&self.runner, &request.blockdev)?;

        let handler = HandlerFactory::create(vendor, self.runner.clone());
        let wwn = handler.resolve_wwn(&businfo)?;

        Ok(WwnResponse::new(wwn, vendor))
    }
}
