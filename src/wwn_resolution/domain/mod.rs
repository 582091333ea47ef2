pub mod bus_location;
pub mod disk_record;
pub mod unit_info;
pub mod vendor;

pub use bus_location::BusLocation;
pub use disk_record::DiskRecord;
pub use unit_info::UnitInfo;
pub use vendor::Vendor;
