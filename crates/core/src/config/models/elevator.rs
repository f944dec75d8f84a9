use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_FLOOR: i32 = 1;
pub const DEFAULT_MAX_FLOOR: i32 = 100;

/// 电梯服务楼层范围
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub min_floor: i32,
    pub max_floor: i32,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            min_floor: DEFAULT_MIN_FLOOR,
            max_floor: DEFAULT_MAX_FLOOR,
        }
    }
}

impl ElevatorConfig {
    /// 楼层是否在闭区间 `[min_floor, max_floor]` 内
    pub fn contains(&self, floor: i32) -> bool {
        (self.min_floor..=self.max_floor).contains(&floor)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_floor > self.max_floor {
            return Err(anyhow::anyhow!(
                "最低楼层 {} 不能高于最高楼层 {}",
                self.min_floor,
                self.max_floor
            ));
        }

        Ok(())
    }
}
