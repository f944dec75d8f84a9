pub mod floor_request;

pub use floor_request::validate_floor;
