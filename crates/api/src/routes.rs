use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use elevator_core::config::ElevatorConfig;
use elevator_core::traits::FloorRequestService;

use crate::handlers::{
    floor_requests::{
        add_request, clear_requests, get_all_requests, get_internal_requests, get_next_stop,
        remove_request, service_current_floor,
    },
    health::health_check,
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn FloorRequestService>,
    pub elevator: ElevatorConfig,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 楼层请求API
        .route("/floorrequests", get(get_all_requests).post(add_request))
        .route("/floorrequests/internal", get(get_internal_requests))
        .route("/floorrequests/next", get(get_next_stop))
        .route("/floorrequests/clear", post(clear_requests))
        .route(
            "/floorrequests/servicecurrentfloor",
            post(service_current_floor),
        )
        .route("/floorrequests/{floor}", delete(remove_request))
        .with_state(state)
}
