pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::models::{ApiConfig, AppConfig, ElevatorConfig, ObservabilityConfig};
pub use errors::*;
pub use models::{Direction, FloorRequest, Origin, TravelDirection};
pub use traits::FloorRequestService;
