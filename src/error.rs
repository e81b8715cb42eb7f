//! 错误类型定义
//!
//! 日志转换本身从不失败（失败通过 `ConversionResult` 表达），这里的错误类型只覆盖
//! 外围操作：读取输入、加载配置、初始化日志以及 JSON 序列化。

/// 外围操作的结果类型
pub type Result<T> = std::result::Result<T, ConverterError>;

/// 外围操作错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// TOML 反序列化错误
    #[error("配置解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("配置序列化错误: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON 序列化错误（仅在启用 json feature 时可用）
    #[cfg(feature = "json")]
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl ConverterError {
    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("未知错误: {}", message);
        Self::Other(message)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, ConverterError::Io(_))
    }

    /// 检查是否为配置错误（包括 TOML 解析失败）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ConverterError::Config(_)
                | ConverterError::TomlDe(_)
                | ConverterError::TomlSer(_)
        )
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, ConverterError::Other(_))
    }
}
