//! MyBatis 日志转换入口
//!
//! 把整段日志转换为参数已替换的 SQL。转换是纯函数：不共享状态、不做 IO，
//! 任何输入都不会返回错误或 panic，失败通过 [`ConversionResult`] 的字段表达。
//!
//! ## 使用示例
//!
//! ```rust
//! use mybatis_log_converter::convert_mybatis_log;
//!
//! let log = "==>  Preparing: SELECT * FROM t WHERE id = ?\n==> Parameters: 1(Integer)";
//! let result = convert_mybatis_log(log);
//! assert!(result.success);
//! assert_eq!(result.sql, "SELECT *\nFROM t\nWHERE id = 1;");
//! ```

use crate::mybatis::display::{ensure_semicolon, format_sql_display, substitute_parameters};
use crate::mybatis::scanner::scan_statements;
use crate::mybatis::types::{ConversionResult, Statement};
use serde::{Deserialize, Serialize};

/// 多条语句之间用一个空行分隔
const STATEMENT_SEPARATOR: &str = "\n\n";

/// 转换选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// 是否在关键字前换行缩进
    pub pretty: bool,
    /// 是否在末尾补分号
    pub append_semicolon: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self { pretty: true, append_semicolon: true }
    }
}

/// MyBatis 日志转换器
#[derive(Debug, Clone, Default)]
pub struct LogConverter {
    options: ConverterOptions,
}

impl LogConverter {
    #[must_use]
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// 只做扫描与配对，返回结构化的语句列表
    #[must_use]
    pub fn statements(&self, text: &str) -> Vec<Statement> {
        scan_statements(text)
    }

    /// 替换参数并格式化单条语句
    #[must_use]
    pub fn render_statement(&self, statement: &Statement) -> String {
        let substituted = substitute_parameters(statement);
        let formatted = if self.options.pretty {
            format_sql_display(&substituted)
        } else {
            substituted.trim().to_string()
        };

        if self.options.append_semicolon {
            ensure_semicolon(formatted)
        } else {
            formatted
        }
    }

    /// 转换整段日志
    #[must_use]
    pub fn convert(&self, text: &str) -> ConversionResult {
        if text.trim().is_empty() {
            return ConversionResult::blank();
        }

        let statements = self.statements(text);
        if statements.is_empty() {
            #[cfg(feature = "logging")]
            tracing::debug!("输入中没有找到 Preparing 行");
            return ConversionResult::not_found();
        }

        #[cfg(feature = "logging")]
        {
            let unpaired =
                statements.iter().filter(|s| s.parameters.is_empty()).count();
            tracing::debug!(
                statements = statements.len(),
                without_parameters = unpaired,
                "日志转换完成"
            );
        }

        let sql = statements
            .iter()
            .map(|stmt| self.render_statement(stmt))
            .collect::<Vec<_>>()
            .join(STATEMENT_SEPARATOR);
        ConversionResult::success(sql)
    }
}

/// 使用默认选项转换 MyBatis 日志
#[must_use]
pub fn convert_mybatis_log(text: &str) -> ConversionResult {
    LogConverter::default().convert(text)
}
