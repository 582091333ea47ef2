use crate::adapters::outbound::controllers::{LsiHandler, ThreeWareHandler};
use crate::ports::outbound::{CommandRunner, WwnResolver};
use crate::wwn_resolution::domain::Vendor;

/// Factory for creating vendor handlers
///
/// This factory encapsulates the creation logic for the vendor-specific
/// handler implementations, following the Factory Pattern. It belongs in
/// the application layer as it orchestrates the selection of infrastructure
/// adapters based on the detected vendor.
pub struct HandlerFactory;

impl HandlerFactory {
    /// Creates a handler for the specified vendor
    ///
    /// # Arguments
    /// * `vendor` - The detected controller vendor
    /// * `runner` - Command runner the handler drives its controller CLI with
    ///
    /// # Returns
    /// A boxed WwnResolver trait object for the vendor. The LSI handler is
    /// a stub whose resolve capability reports "not implemented".
    pub fn create<R>(vendor: Vendor, runner: R) -> Box<dyn WwnResolver>
    where
        R: CommandRunner + 'static,
    {
        match vendor {
            Vendor::ThreeWare => Box::new(ThreeWareHandler::new(runner)),
            Vendor::Lsi => Box::new(LsiHandler::new()),
        }
    }
}
