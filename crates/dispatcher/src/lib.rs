//! Floor request dispatcher
//!
//! SCAN 调度：沿当前方向依次停靠，前方没有可停靠的请求时掉头。
//!
//! - [`DispatchState`] 是不加锁的纯状态机，所有操作都是 `&mut self`
//! - [`FloorRequestDispatcher`] 用一把互斥锁包住整个状态，实现
//!   [`elevator_core::FloorRequestService`]，供 HTTP 层并发调用

pub mod dispatch_state;
pub mod floor_request_dispatcher;

pub use dispatch_state::DispatchState;
pub use floor_request_dispatcher::FloorRequestDispatcher;
