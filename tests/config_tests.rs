//! 配置模块的集成测试

use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod config_tests {
    use super::*;
    use mybatis_log_converter::config::{Config, OutputFormat};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.log_dir, None);
        assert!(config.converter.pretty);
        assert!(config.converter.append_semicolon);
        assert_eq!(config.output.format, OutputFormat::Sql);
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
[log]
enabled = false
level = "debug"
log_dir = "/tmp/mybatis-logs"

[converter]
pretty = false

[output]
format = "json"
"#;
        let config = Config::from_toml_str(toml_content).unwrap();
        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.log_dir.as_deref(), Some("/tmp/mybatis-logs"));
        assert!(!config.converter.pretty);
        // 未配置的字段使用默认值
        assert!(config.converter.append_semicolon);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_toml_str("[log]\nlevel = \"loud\"").unwrap_err();
        assert!(err.is_config_error());

        let err = Config::from_toml_str("[output]\nformat = \"xml\"").unwrap_err();
        assert!(err.is_config_error());

        let err = Config::from_toml_str("[converter]\npretty = \"yes\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.log.level = "warn".to_string();
        config.output.format = OutputFormat::Json;
        config.save_to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[log]"));
        assert!(content.contains("format = \"json\""));

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_io_error());
    }
}
