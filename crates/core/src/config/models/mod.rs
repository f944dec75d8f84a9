pub mod api_observability;
pub mod app_config;
pub mod elevator;

pub use api_observability::{ApiConfig, ObservabilityConfig};
pub use app_config::AppConfig;
pub use elevator::ElevatorConfig;
