use crate::models::{Direction, FloorRequest};

/// 楼层请求调度服务接口
///
/// 所有方法同步执行，实现方需要保证每个调用在内部作为一个完整的临界区完成。
pub trait FloorRequestService: Send + Sync {
    /// 添加楼层请求，同一楼层的请求会被合并
    fn add_request(&self, request: FloorRequest);

    /// 删除指定楼层的请求，返回是否实际删除
    fn remove_request(&self, floor: i32) -> bool;

    /// 获取全部待处理请求（按楼层升序的快照）
    fn get_all_requests(&self) -> Vec<FloorRequest>;

    /// 获取轿厢内请求（按楼层升序的快照）
    fn get_internal_requests(&self) -> Vec<FloorRequest>;

    /// 计算下一个停靠楼层
    fn get_next_stop(&self) -> Option<FloorRequest>;

    /// 标记当前楼层已服务
    fn service_current_floor(&self);

    /// 清空所有请求并重置运行方向
    fn clear_all_requests(&self);

    /// 当前运行方向
    fn current_direction(&self) -> Direction;
}
