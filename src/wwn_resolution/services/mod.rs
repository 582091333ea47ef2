pub mod inventory;
pub mod vendor_detector;

pub use inventory::DiskInventory;
pub use vendor_detector::VendorDetector;
