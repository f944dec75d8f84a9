use std::fmt;

use serde::{Deserialize, Serialize};

/// 请求方向
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 厅外上行按钮
    Up,
    /// 厅外下行按钮
    Down,
    /// 无论运行方向都需要停靠（轿厢内请求，或上下按钮都被按下）
    Both,
}

impl Direction {
    /// 反向。`Both` 的反向仍是 `Both`
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Both => Direction::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Both => "Both",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求来源
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Origin {
    /// 轿厢内请求，总是停靠
    Internal,
    /// 厅外召唤，仅在方向匹配时停靠
    External,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Internal => "Internal",
            Origin::External => "External",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 轿厢运行方向，不存在 `Both`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TravelDirection {
    #[default]
    Up,
    Down,
}

impl TravelDirection {
    pub fn reversed(self) -> Self {
        match self {
            TravelDirection::Up => TravelDirection::Down,
            TravelDirection::Down => TravelDirection::Up,
        }
    }

    /// 根据首个请求的方向确定初始运行方向，`Both` 时默认向上
    pub fn from_request(direction: Direction) -> Self {
        match direction {
            Direction::Down => TravelDirection::Down,
            Direction::Up | Direction::Both => TravelDirection::Up,
        }
    }
}

impl From<TravelDirection> for Direction {
    fn from(direction: TravelDirection) -> Self {
        match direction {
            TravelDirection::Up => Direction::Up,
            TravelDirection::Down => Direction::Down,
        }
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Direction::from(*self).fmt(f)
    }
}

/// 楼层请求
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloorRequest {
    pub floor: i32,
    pub direction: Direction,
    pub origin: Origin,
}

impl FloorRequest {
    pub fn new(floor: i32, direction: Direction, origin: Origin) -> Self {
        Self {
            floor,
            direction,
            origin,
        }
    }

    /// 轿厢内请求
    pub fn internal(floor: i32) -> Self {
        Self::new(floor, Direction::Both, Origin::Internal)
    }

    /// 厅外召唤
    pub fn external(floor: i32, direction: Direction) -> Self {
        Self::new(floor, direction, Origin::External)
    }

    pub fn is_internal(&self) -> bool {
        self.origin == Origin::Internal
    }

    /// 合并同一楼层的两个请求
    ///
    /// 只有两个请求都来自轿厢内时结果才是 `Internal`。来源不同，或来源相同但方向不同时，
    /// 方向合并为 `Both`。
    pub fn merge(self, incoming: FloorRequest) -> FloorRequest {
        let origin = if self.is_internal() && incoming.is_internal() {
            Origin::Internal
        } else {
            Origin::External
        };

        let direction = if self.origin != incoming.origin || self.direction != incoming.direction
        {
            Direction::Both
        } else {
            self.direction
        };

        FloorRequest {
            floor: self.floor,
            direction,
            origin,
        }
    }

    pub fn with_direction(self, direction: Direction) -> FloorRequest {
        FloorRequest { direction, ..self }
    }

    /// 在给定运行方向下是否应当停靠
    pub fn is_eligible(&self, travel: TravelDirection) -> bool {
        self.is_internal()
            || self.direction == Direction::Both
            || self.direction == Direction::from(travel)
    }
}

impl fmt::Display for FloorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.floor, self.direction, self.origin)
    }
}
