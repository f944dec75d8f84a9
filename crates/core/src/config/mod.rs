//! 配置管理
//!
//! 配置按以下顺序叠加，后者覆盖前者：
//!
//! 1. 内置默认值
//! 2. TOML 配置文件
//! 3. 环境变量（前缀 `ELEVATOR`，层级分隔符 `__`，例如 `ELEVATOR__ELEVATOR__MAX_FLOOR=50`）
//!
//! ```rust,no_run
//! use elevator_core::config::models::AppConfig;
//!
//! let config = AppConfig::load(Some("config/elevator.toml")).unwrap();
//! println!("服务楼层: {} - {}", config.elevator.min_floor, config.elevator.max_floor);
//! ```

pub mod models;

pub use models::*;
