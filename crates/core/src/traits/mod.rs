pub mod floor_request_service;

pub use floor_request_service::*;
