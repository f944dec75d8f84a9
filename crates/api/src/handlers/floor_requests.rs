use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use elevator_core::models::FloorRequest;
use elevator_core::ElevatorError;

use crate::{
    error::ApiResult,
    response::{created, no_content, success},
    routes::AppState,
    validation::validate_floor,
};

/// 获取全部待处理请求
pub async fn get_all_requests(State(state): State<AppState>) -> impl IntoResponse {
    success(state.service.get_all_requests())
}

/// 获取轿厢内请求
pub async fn get_internal_requests(State(state): State<AppState>) -> impl IntoResponse {
    success(state.service.get_internal_requests())
}

/// 计算下一停靠楼层，没有可停靠楼层时返回404
pub async fn get_next_stop(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let next = state
        .service
        .get_next_stop()
        .ok_or(ElevatorError::NoPendingRequests)?;

    Ok(success(next))
}

/// 添加楼层请求
pub async fn add_request(
    State(state): State<AppState>,
    payload: Result<Json<FloorRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!("无法解析楼层请求: {}", rejection.body_text());
    })?;

    if let Err(err) = validate_floor(request.floor, &state.elevator) {
        warn!("拒绝楼层请求 {}: {}", request, err);
        return Err(err.into());
    }

    state.service.add_request(request);
    info!("已添加楼层请求: {}", request);

    Ok(created(format!("/floorrequests/{}", request.floor), request))
}

/// 删除指定楼层的请求
pub async fn remove_request(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    if !state.service.remove_request(floor) {
        return Err(ElevatorError::request_not_found(floor).into());
    }

    Ok(no_content())
}

/// 清空所有请求
pub async fn clear_requests(State(state): State<AppState>) -> impl IntoResponse {
    state.service.clear_all_requests();
    no_content()
}

/// 标记当前楼层已服务
pub async fn service_current_floor(State(state): State<AppState>) -> impl IntoResponse {
    state.service.service_current_floor();
    no_content()
}
