use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use elevator_core::ElevatorError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("调度错误: {0}")]
    Elevator(#[from] ElevatorError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, suggestions) = match &self {
            ApiError::Elevator(ElevatorError::FloorOutOfRange { min, max, .. }) => (
                StatusCode::BAD_REQUEST,
                "FLOOR_OUT_OF_RANGE",
                vec![
                    format!("请求的楼层必须在 {} 到 {} 之间", min, max),
                    "可通过 elevator.min_floor / elevator.max_floor 调整服务范围".to_string(),
                ],
            ),
            ApiError::Elevator(ElevatorError::RequestNotFound { .. }) => (
                StatusCode::NOT_FOUND,
                "REQUEST_NOT_FOUND",
                vec!["使用 GET /floorrequests 查看所有待处理请求".to_string()],
            ),
            ApiError::Elevator(ElevatorError::NoPendingRequests) => (
                StatusCode::NOT_FOUND,
                "NO_PENDING_REQUESTS",
                vec!["使用 POST /floorrequests 添加楼层请求".to_string()],
            ),
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                vec![
                    "请求体应为 JSON: {\"floor\": 5, \"direction\": \"Up\", \"origin\": \"External\"}"
                        .to_string(),
                    "direction 取值 Up / Down / Both，origin 取值 Internal / External".to_string(),
                ],
            ),
        };
        let error_message = match &self {
            ApiError::Elevator(err) => err.to_string(),
            ApiError::BadRequest(_) => self.to_string(),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "status": status.as_u16(),
                "suggestions": suggestions,
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
