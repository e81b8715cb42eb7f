//! 命令行参数解析与结果输出
//!
//! 参数采用 `--flag` / `--flag=value` 形式，命令行参数覆盖配置文件。

use crate::config::{Config, OutputFormat};
use crate::error::{ConverterError, Result};
use crate::mybatis::ConversionResult;
use std::path::PathBuf;

/// 帮助信息
pub const USAGE: &str = "用法: mybatis-log-cli [选项] [文件]

未给出文件或文件为 - 时从标准输入读取日志。

选项:
  --config=PATH       TOML 配置文件
  --format=sql|json   输出格式
  --log-level=LEVEL   日志级别 (trace, debug, info, warn, error)
  --no-log            关闭日志
  --no-pretty         不做关键字换行
  --no-semicolon      不补末尾分号
  -h, --help          显示帮助";

/// 命令行参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub no_log: bool,
    pub no_pretty: bool,
    pub no_semicolon: bool,
    pub help: bool,
    pub input: Option<PathBuf>,
}

impl CliArgs {
    /// 从命令行参数解析（不含程序名）
    pub fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Self> {
        let mut cli = Self::default();
        for arg in args {
            if arg == "-h" || arg == "--help" {
                cli.help = true;
            } else if arg == "--no-log" {
                cli.no_log = true;
            } else if arg == "--no-pretty" {
                cli.no_pretty = true;
            } else if arg == "--no-semicolon" {
                cli.no_semicolon = true;
            } else if let Some(path) = arg.strip_prefix("--config=") {
                cli.config = Some(PathBuf::from(path));
            } else if let Some(fmt) = arg.strip_prefix("--format=") {
                cli.format = Some(fmt.parse()?);
            } else if let Some(lvl) = arg.strip_prefix("--log-level=") {
                cli.log_level = Some(lvl.to_string());
            } else if arg.starts_with("--") {
                return Err(ConverterError::config_error(format!(
                    "未知参数: {arg}"
                )));
            } else if cli.input.is_some() {
                return Err(ConverterError::config_error(format!(
                    "只能指定一个输入文件: {arg}"
                )));
            } else {
                cli.input = Some(PathBuf::from(arg));
            }
        }
        Ok(cli)
    }

    /// 用命令行参数覆盖配置，并重新校验
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if self.no_log {
            config.log.enabled = false;
        }
        if self.no_pretty {
            config.converter.pretty = false;
        }
        if self.no_semicolon {
            config.converter.append_semicolon = false;
        }
        config.validate()
    }

    /// 加载配置文件（若指定）并应用命令行覆盖
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        self.apply(&mut config)?;
        Ok(config)
    }
}

/// 按输出格式渲染转换结果
pub fn render_output(result: &ConversionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sql => Ok(result.sql.clone()),
        #[cfg(feature = "json")]
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => {
            Err(ConverterError::config_error("JSON 输出需要启用 json feature"))
        }
    }
}
