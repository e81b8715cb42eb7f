//! 配置管理模块
//!
//! 从 TOML 文件读取日志、转换和输出配置，缺失的段或字段使用默认值。
//!
//! ```toml
//! [log]
//! enabled = true
//! level = "info"
//! log_dir = "logs"
//!
//! [converter]
//! pretty = true
//! append_semicolon = true
//!
//! [output]
//! format = "sql"
//! ```

use crate::error::{ConverterError, Result};
use crate::mybatis::ConverterOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 支持的日志级别
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 主配置结构体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志配置
    pub log: LogSection,
    /// 转换选项
    pub converter: ConverterOptions,
    /// 输出配置
    pub output: OutputSection,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// 是否启用日志
    pub enabled: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志文件目录，不配置则只输出到控制台
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

impl Default for LogSection {
    fn default() -> Self {
        Self { enabled: true, level: "info".to_string(), log_dir: None }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 直接输出 SQL 文本
    #[default]
    Sql,
    /// 输出序列化后的转换结果
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sql" => Ok(Self::Sql),
            "json" => Ok(Self::Json),
            other => Err(ConverterError::config_error(format!(
                "无效的输出格式: {other}"
            ))),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从字符串加载配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        let level = self.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConverterError::config_error(format!(
                "无效的日志级别: {}",
                self.log.level
            )));
        }

        if let Some(dir) = &self.log.log_dir {
            if dir.trim().is_empty() {
                return Err(ConverterError::config_error("日志目录不能为空"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        // 测试无效日志级别
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());

        // 测试空日志目录
        config.log.level = "DEBUG".to_string();
        config.log.log_dir = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed_config: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed_config);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sql".parse::<OutputFormat>().unwrap(), OutputFormat::Sql);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
