//! # mybatis-log-converter
//!
//! 把 MyBatis 调试日志中的 `Preparing:` / `Parameters:` 行对还原为参数已替换、
//! 便于阅读的 SQL。
//!
//! ```rust
//! use mybatis_log_converter::convert_mybatis_log;
//!
//! let log = "Preparing: UPDATE t SET name = ? WHERE id = ?\nParameters: Tom(String), 7(Integer)";
//! let result = convert_mybatis_log(log);
//! assert_eq!(result.sql, "UPDATE t SET name = 'Tom'\nWHERE id = 7;");
//! ```

// 核心模块 - 始终可用
pub mod error;
pub mod mybatis;

// 外围模块 - 配置、输入与命令行
pub mod cli;
pub mod config;
pub mod input;

// 日志模块 - 需要 logging feature
#[cfg(feature = "logging")]
pub mod logging;

pub use error::{ConverterError, Result};
pub use mybatis::{
    ConversionResult, ConverterOptions, LogConverter, Parameter, Statement,
    convert_mybatis_log,
};
