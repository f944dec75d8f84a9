use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    api_observability::{ApiConfig, ObservabilityConfig},
    elevator::ElevatorConfig,
};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/elevator.toml", "elevator.toml"];

/// System configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub elevator: ElevatorConfig,
    pub api: ApiConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from config file and environment variables
    ///
    /// Load order:
    /// 1. Default configuration
    /// 2. Config file (TOML format)
    /// 3. Environment variable overrides (prefix: ELEVATOR, separator: `__`)
    ///
    /// An explicit `config_path` must exist; without one the default paths are
    /// probed and a missing file is not an error.
    ///
    /// The result is not validated, so callers can apply overrides first and
    /// then call [`AppConfig::validate`].
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with_environment(config_path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("ELEVATOR")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_environment(config_path: Option<&str>, environment: Environment) -> Result<Self> {
        let defaults = AppConfig::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("elevator.min_floor", i64::from(defaults.elevator.min_floor))?
            .set_default("elevator.max_floor", i64::from(defaults.elevator.max_floor))?
            .set_default("api.bind_address", defaults.api.bind_address.as_str())?
            .set_default("api.cors_enabled", defaults.api.cors_enabled)?
            .set_default(
                "api.request_timeout_seconds",
                defaults.api.request_timeout_seconds,
            )?
            .set_default("observability.log_level", defaults.observability.log_level.as_str())?
            .set_default(
                "observability.log_format",
                defaults.observability.log_format.as_str(),
            )?;

        // 1. Load config file if provided
        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        // 2. Environment variable overrides - highest priority
        builder = builder.add_source(environment);

        let mut config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.normalize();

        Ok(config)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }

    pub fn normalize(&mut self) {
        self.observability.normalize();
    }

    pub fn validate(&self) -> Result<()> {
        self.elevator.validate().context("电梯楼层配置验证失败")?;
        self.api.validate().context("API配置验证失败")?;
        self.observability
            .validate()
            .context("可观测性配置验证失败")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(source.into_iter().collect()))
    }

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_with_environment(None, env_from(&[])).unwrap();

        assert_eq!(config.elevator.min_floor, 1);
        assert_eq!(config.elevator.max_floor, 100);
        assert_eq!(config.api.bind_address, "0.0.0.0:8080");
        assert_eq!(config.observability.log_format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[elevator]
min_floor = -2
max_floor = 40

[api]
bind_address = "127.0.0.1:9000"
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config = AppConfig::load_with_environment(Some(path), env_from(&[])).unwrap();

        assert_eq!(config.elevator.min_floor, -2);
        assert_eq!(config.elevator.max_floor, 40);
        assert_eq!(config.api.bind_address, "127.0.0.1:9000");
        assert!(config.api.cors_enabled);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[elevator]\nmax_floor = 40").unwrap();

        let path = file.path().to_str().unwrap();
        let config = AppConfig::load_with_environment(
            Some(path),
            env_from(&[
                ("ELEVATOR__ELEVATOR__MAX_FLOOR", "12"),
                ("ELEVATOR__OBSERVABILITY__LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.elevator.max_floor, 12);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result =
            AppConfig::load_with_environment(Some("/nonexistent/elevator.toml"), env_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let result = AppConfig::from_toml("[elevator]\nmin_floor = 50\nmax_floor = 10\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let result = AppConfig::from_toml("[observability]\nlog_format = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_uppercase_log_format_is_normalized() {
        let config = AppConfig::from_toml("[observability]\nlog_format = \"JSON\"\n").unwrap();
        assert_eq!(config.observability.log_format, "json");

        let config = AppConfig::load_with_environment(
            None,
            env_from(&[("ELEVATOR__OBSERVABILITY__LOG_LEVEL", "WARN")]),
        )
        .unwrap();
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_load_defers_validation_to_caller() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbind_address = \"not-an-address\"\n\n[observability]\nlog_format = \"xml\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let mut config = AppConfig::load_with_environment(Some(path), env_from(&[])).unwrap();
        assert!(config.validate().is_err());

        config.api.bind_address = "127.0.0.1:9000".to_string();
        config.observability.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::from_toml("[elevator]\nmax_floor = 20\n").unwrap();
        let serialized = config.to_toml().unwrap();
        let reparsed = AppConfig::from_toml(&serialized).unwrap();

        assert_eq!(reparsed.elevator, config.elevator);
        assert_eq!(reparsed.api.bind_address, config.api.bind_address);
    }
}
