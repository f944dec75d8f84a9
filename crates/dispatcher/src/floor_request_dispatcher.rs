use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use elevator_core::models::{Direction, FloorRequest};
use elevator_core::traits::FloorRequestService;

use crate::dispatch_state::DispatchState;

/// 单个轿厢的楼层请求调度器
///
/// 请求集合、游标和运行方向由同一把锁保护，每个操作在整个方法体内持有锁。
#[derive(Debug, Default)]
pub struct FloorRequestDispatcher {
    state: Mutex<DispatchState>,
}

impl FloorRequestDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    // 每个操作在修改前后都保持状态有效，锁中毒时直接取回内部状态
    fn state(&self) -> MutexGuard<'_, DispatchState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 游标所在的请求，不触发扫描
    pub fn current_stop(&self) -> Option<FloorRequest> {
        self.state().current_stop()
    }

    pub fn len(&self) -> usize {
        self.state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }
}

impl FloorRequestService for FloorRequestDispatcher {
    fn add_request(&self, request: FloorRequest) {
        let mut state = self.state();
        state.add_request(request);
        debug!("当前待处理请求数: {}", state.len());
    }

    fn remove_request(&self, floor: i32) -> bool {
        let removed = self.state().remove_request(floor);
        if removed {
            info!("已删除楼层 {} 的请求", floor);
        } else {
            debug!("楼层 {} 没有待处理的请求", floor);
        }
        removed
    }

    fn get_all_requests(&self) -> Vec<FloorRequest> {
        self.state().all_requests()
    }

    fn get_internal_requests(&self) -> Vec<FloorRequest> {
        self.state().internal_requests()
    }

    fn get_next_stop(&self) -> Option<FloorRequest> {
        let mut state = self.state();
        let next = state.next_stop();
        match next {
            Some(request) => debug!("下一停靠楼层: {} (运行方向: {})", request, state.direction()),
            None => debug!("没有待停靠的楼层"),
        }
        next
    }

    fn service_current_floor(&self) {
        let mut state = self.state();
        let serviced = state.current_stop();
        state.service_current_floor();
        if let Some(request) = serviced {
            info!(
                "已服务楼层 {}，剩余请求数: {}，运行方向: {}",
                request.floor,
                state.len(),
                state.direction()
            );
        }
    }

    fn clear_all_requests(&self) {
        self.state().clear();
        info!("已清空所有楼层请求");
    }

    fn current_direction(&self) -> Direction {
        self.state().direction().into()
    }
}
