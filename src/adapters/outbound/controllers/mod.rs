/// Vendor controller handlers - adapters over the vendor management CLIs
pub mod lsi;
pub mod three_ware;

pub use lsi::LsiHandler;
pub use three_ware::ThreeWareHandler;
