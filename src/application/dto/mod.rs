pub mod wwn_request;
pub mod wwn_response;

pub use wwn_request::WwnRequest;
pub use wwn_response::WwnResponse;
