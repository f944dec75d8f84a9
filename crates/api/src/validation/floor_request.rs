use elevator_core::config::ElevatorConfig;
use elevator_core::ElevatorError;

/// 验证楼层是否在服务范围内（闭区间）
pub fn validate_floor(floor: i32, config: &ElevatorConfig) -> Result<(), ElevatorError> {
    if !config.contains(floor) {
        return Err(ElevatorError::floor_out_of_range(
            floor,
            config.min_floor,
            config.max_floor,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_floor_bounds_are_inclusive() {
        let config = ElevatorConfig::default();

        assert!(validate_floor(1, &config).is_ok());
        assert!(validate_floor(50, &config).is_ok());
        assert!(validate_floor(100, &config).is_ok());
    }

    #[test]
    fn test_validate_floor_out_of_range() {
        let config = ElevatorConfig::default();

        assert!(matches!(
            validate_floor(0, &config),
            Err(ElevatorError::FloorOutOfRange { floor: 0, min: 1, max: 100 })
        ));
        assert!(validate_floor(101, &config).is_err());
    }

    #[test]
    fn test_validate_floor_with_basement_levels() {
        let config = ElevatorConfig {
            min_floor: -3,
            max_floor: 20,
        };

        assert!(validate_floor(-3, &config).is_ok());
        assert!(validate_floor(-4, &config).is_err());
        assert!(validate_floor(21, &config).is_err());
    }
}
