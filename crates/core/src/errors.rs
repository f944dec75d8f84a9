use thiserror::Error;

/// 电梯调度错误类型定义
#[derive(Debug, Error)]
pub enum ElevatorError {
    #[error("楼层 {floor} 超出允许范围 [{min}, {max}]")]
    FloorOutOfRange { floor: i32, min: i32, max: i32 },

    #[error("楼层 {floor} 没有待处理的请求")]
    RequestNotFound { floor: i32 },

    #[error("没有待停靠的楼层")]
    NoPendingRequests,
}

impl ElevatorError {
    pub fn floor_out_of_range(floor: i32, min: i32, max: i32) -> Self {
        Self::FloorOutOfRange { floor, min, max }
    }

    pub fn request_not_found(floor: i32) -> Self {
        Self::RequestNotFound { floor }
    }
}
