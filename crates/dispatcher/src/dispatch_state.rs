use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use tracing::debug;

use elevator_core::models::{Direction, FloorRequest, TravelDirection};

/// 一次 `next_stop` 扫描中允许的最大掉头次数。
/// 两次掉头后整个序列已在两个方向上各完整扫过一遍。
const MAX_REVERSALS: usize = 2;

/// 调度状态：待处理请求、游标和运行方向
///
/// 请求按楼层存放在有序映射中，游标保存楼层号而不是位置，每次操作重新定位。
#[derive(Debug, Default)]
pub struct DispatchState {
    requests: BTreeMap<i32, FloorRequest>,
    cursor: Option<i32>,
    direction: TravelDirection,
}

impl DispatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn direction(&self) -> TravelDirection {
        self.direction
    }

    /// 游标所在的请求，不做任何扫描
    pub fn current_stop(&self) -> Option<FloorRequest> {
        self.cursor
            .and_then(|floor| self.requests.get(&floor))
            .copied()
    }

    /// 添加请求。同楼层已有请求时用合并结果替换，游标和方向不变
    pub fn add_request(&mut self, request: FloorRequest) {
        match self.requests.entry(request.floor) {
            Entry::Occupied(mut entry) => {
                let merged = entry.get().merge(request);
                debug!(
                    "合并楼层请求: {} + {} -> {}",
                    entry.get(),
                    request,
                    merged
                );
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                debug!("新增楼层请求: {}", request);
                entry.insert(request);
            }
        }
    }

    /// 删除请求。被删除的是游标所在请求时，游标移到上方相邻请求，其次下方，否则清空
    pub fn remove_request(&mut self, floor: i32) -> bool {
        if self.requests.remove(&floor).is_none() {
            return false;
        }

        if self.cursor == Some(floor) {
            self.cursor = self
                .neighbour(floor, TravelDirection::Up)
                .or_else(|| self.neighbour(floor, TravelDirection::Down));
            debug!("删除游标所在楼层 {}，游标移至 {:?}", floor, self.cursor);
        }

        true
    }

    pub fn all_requests(&self) -> Vec<FloorRequest> {
        self.requests.values().copied().collect()
    }

    pub fn internal_requests(&self) -> Vec<FloorRequest> {
        self.requests
            .values()
            .filter(|request| request.is_internal())
            .copied()
            .collect()
    }

    /// 清空请求并把方向重置为向上
    pub fn clear(&mut self) {
        self.requests.clear();
        self.cursor = None;
        self.direction = TravelDirection::Up;
    }

    /// 计算下一个停靠楼层
    pub fn next_stop(&mut self) -> Option<FloorRequest> {
        let mut position = match self.cursor {
            Some(floor) if self.requests.contains_key(&floor) => floor,
            _ => return self.start_from_lowest(),
        };

        let mut reversals = 0;
        loop {
            let request = self.requests.get(&position).copied()?;
            if request.is_eligible(self.direction) {
                self.cursor = Some(position);
                return Some(request);
            }

            debug!("跳过楼层 {} (运行方向: {})", request, self.direction);

            match self.neighbour(position, self.direction) {
                Some(next) => position = next,
                None if reversals < MAX_REVERSALS => {
                    reversals += 1;
                    self.direction = self.direction.reversed();
                    debug!("到达端点 {}，掉头为 {}", position, self.direction);
                }
                None => break,
            }
        }

        debug!("扫描结束，没有可停靠的楼层");
        None
    }

    /// 标记游标所在楼层已服务
    ///
    /// 外部请求还需要反方向服务时保留，方向改写为当前运行方向的反向；否则删除。
    /// 随后游标沿运行方向前进一步，到达端点时先掉头。
    pub fn service_current_floor(&mut self) {
        let Some(floor) = self.cursor else {
            return;
        };
        let Some(current) = self.requests.get(&floor).copied() else {
            self.cursor = None;
            return;
        };

        let travel = Direction::from(self.direction);
        let needs_other_direction = !current.is_internal()
            && (current.direction == Direction::Both || current.direction != travel);

        if needs_other_direction {
            let remaining = current.with_direction(travel.opposite());
            self.requests.insert(floor, remaining);
            self.cursor = Some(self.step_or_reverse(floor));
            debug!("楼层 {} 部分服务，保留为 {}", floor, remaining);
        } else {
            self.requests.remove(&floor);
            self.cursor = self.advance_from(floor);
            debug!("楼层 {} 服务完成，游标移至 {:?}", floor, self.cursor);
        }
    }

    fn start_from_lowest(&mut self) -> Option<FloorRequest> {
        self.cursor = None;
        let first = self.requests.values().next().copied()?;

        self.cursor = Some(first.floor);
        self.direction = TravelDirection::from_request(first.direction);
        debug!("从最低楼层开始: {}，运行方向: {}", first, self.direction);

        Some(first)
    }

    /// 沿运行方向前进一步；到达端点时掉头并停在原位，由新方向重新判定当前楼层
    fn step_or_reverse(&mut self, floor: i32) -> i32 {
        if let Some(next) = self.neighbour(floor, self.direction) {
            return next;
        }

        self.direction = self.direction.reversed();
        debug!("楼层 {} 为端点，掉头为 {} 并留在原位", floor, self.direction);
        floor
    }

    /// 删除后沿运行方向的相邻楼层，到达端点时掉头后再取
    fn advance_from(&mut self, floor: i32) -> Option<i32> {
        if let Some(next) = self.neighbour(floor, self.direction) {
            return Some(next);
        }

        self.direction = self.direction.reversed();
        debug!("楼层 {} 为端点，掉头为 {}", floor, self.direction);
        self.neighbour(floor, self.direction)
    }

    /// `floor` 本身不必在映射中
    fn neighbour(&self, floor: i32, direction: TravelDirection) -> Option<i32> {
        match direction {
            TravelDirection::Up => self
                .requests
                .range((Excluded(floor), Unbounded))
                .next()
                .map(|(floor, _)| *floor),
            TravelDirection::Down => self
                .requests
                .range(..floor)
                .next_back()
                .map(|(floor, _)| *floor),
        }
    }
}
