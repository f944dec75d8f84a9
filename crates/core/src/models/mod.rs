//! # 数据模型
//!
//! 定义电梯调度系统的核心数据结构：楼层请求、请求方向和请求来源。
//!
//! ## 核心模型
//!
//! ### FloorRequest - 楼层请求
//! 表示一个待停靠的楼层。同一楼层在任何时刻最多只有一个请求，重复的请求会被合并。
//!
//! ### Direction / Origin
//! 请求方向（`Up` / `Down` / `Both`）和请求来源（轿厢内 `Internal` / 厅外召唤 `External`）。
//! 序列化时使用枚举名称而非数字编码。
//!
//! ### TravelDirection - 运行方向
//! 轿厢的物理运行方向，只有 `Up` 和 `Down` 两种取值。
//!
//! ## 使用示例
//!
//! ```rust
//! use elevator_core::models::*;
//!
//! let hall_call = FloorRequest::external(5, Direction::Up);
//! let cabin_call = FloorRequest::internal(5);
//!
//! let merged = hall_call.merge(cabin_call);
//! assert_eq!(merged.origin, Origin::External);
//! assert_eq!(merged.direction, Direction::Both);
//! ```

pub mod floor_request;

pub use floor_request::*;
