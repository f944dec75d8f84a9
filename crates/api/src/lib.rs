//! # Elevator API
//!
//! 电梯楼层请求调度的REST API服务模块，把调度器的操作暴露为HTTP接口。
//!
//! ## 概述
//!
//! 此模块基于Axum框架构建，提供：
//! - 楼层请求管理（添加、删除、清空、查询）
//! - 调度操作（计算下一停靠楼层、标记当前楼层已服务）
//! - 健康检查
//!
//! ## 接口一览
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | `/floorrequests` | 全部待处理请求 |
//! | GET | `/floorrequests/internal` | 轿厢内请求 |
//! | GET | `/floorrequests/next` | 下一停靠楼层，没有时返回404 |
//! | POST | `/floorrequests` | 添加请求，返回201 |
//! | DELETE | `/floorrequests/{floor}` | 删除请求，不存在时返回404 |
//! | POST | `/floorrequests/clear` | 清空请求 |
//! | POST | `/floorrequests/servicecurrentfloor` | 标记当前楼层已服务 |
//! | GET | `/health` | 健康检查 |
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use elevator_api::create_app;
//! use elevator_core::{AppConfig, FloorRequestService};
//!
//! # async fn example(service: Arc<dyn FloorRequestService>) -> anyhow::Result<()> {
//! let config = AppConfig::default();
//! let app = create_app(service, &config);
//!
//! let listener = tokio::net::TcpListener::bind(&config.api.bind_address).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod validation;

use axum::{http::StatusCode, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use elevator_core::config::AppConfig;
use elevator_core::traits::FloorRequestService;
use middleware::{cors_layer, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(service: Arc<dyn FloorRequestService>, config: &AppConfig) -> Router {
    let state = AppState {
        service,
        elevator: config.elevator,
    };

    let timeout = Duration::from_secs(config.api.request_timeout_seconds);
    let router = create_routes(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                timeout,
            ))
            .layer(axum::middleware::from_fn(request_logging)),
    );

    if config.api.cors_enabled {
        router.layer(cors_layer())
    } else {
        router
    }
}
