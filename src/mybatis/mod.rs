//! MyBatis 日志解析与 SQL 还原模块
//!
//! 提供 `Preparing:` / `Parameters:` 日志行的配对、参数解析、按类型格式化以及展示格式化。

pub mod converter;
pub mod display;
pub mod params;
pub mod scanner;
pub mod types;
pub mod value;

// 重新导出核心类型和函数
pub use converter::{ConverterOptions, LogConverter, convert_mybatis_log};
pub use scanner::{StatementScanner, scan_statements};
pub use types::{ConversionResult, NO_VALID_LOG_FOUND, Parameter, Statement};
