use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

pub fn success<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(data))
}

/// 201 Created，附带指向新资源的 `Location` 头
pub fn created<T: Serialize>(location: String, data: T) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
}

pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
