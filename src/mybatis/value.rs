//! 按类型标注格式化参数值
//!
//! 类型标注（不区分大小写）先映射为 [`ValueKind`]，再由对应策略生成替换 `?` 的文本。

use crate::mybatis::types::Parameter;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 十进制数字：可选符号、整数/小数部分、可选指数
    static ref DECIMAL_RE: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
    /// 0x / 0o / 0b 前缀的整数
    static ref RADIX_RE: Regex =
        Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap();
}

/// 参数值的格式化策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 去引号、还原 `\'`、加单引号
    Text,
    /// 原样输出
    Boolean,
    /// 去掉首尾各一个引号
    Numeric,
    /// 未知类型：看起来像数字就原样输出，否则按字符串处理
    Unknown,
}

impl ValueKind {
    /// 根据类型标注选择格式化策略
    #[must_use]
    pub fn from_type_tag(type_tag: &str) -> Self {
        match type_tag.to_lowercase().as_str() {
            "string" | "char" | "date" | "time" | "timestamp" => Self::Text,
            "boolean" => Self::Boolean,
            "integer" | "int" | "long" | "short" | "bigdecimal" | "double"
            | "float" => Self::Numeric,
            _ => Self::Unknown,
        }
    }
}

/// 生成替换一个 `?` 的字面量文本
#[must_use]
pub fn format_parameter(param: &Parameter) -> String {
    format_value(&param.value, &param.type_tag)
}

/// 根据类型标注格式化原始值。
///
/// `null` / `NULL`（仅这两种写法）无论类型如何都输出不带引号的 `NULL`。
#[must_use]
pub fn format_value(value: &str, type_tag: &str) -> String {
    if value == "null" || value == "NULL" {
        return "NULL".to_string();
    }

    match ValueKind::from_type_tag(type_tag) {
        ValueKind::Text => format_string_value(value),
        ValueKind::Boolean => value.to_string(),
        ValueKind::Numeric => strip_quotes(value).to_string(),
        ValueKind::Unknown => {
            if looks_numeric(value) {
                value.to_string()
            } else {
                format_string_value(value)
            }
        }
    }
}

/// 字符串值格式化：去掉首尾各一个引号，把 `\'` 还原为 `'`，再包一层单引号。
///
/// 仅用于展示，结果不保证可以安全执行；其他转义序列原样保留。
#[must_use]
pub fn format_string_value(value: &str) -> String {
    let cleaned = strip_quotes(value).replace("\\'", "'");
    format!("'{cleaned}'")
}

/// 去掉开头的一个引号和结尾的一个引号（`'` 或 `"`），两端各自独立判断
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}

/// 判断文本能否作为数字解析。
///
/// 与浏览器里 `Number(text)` 的判定保持一致：空白串视为 0，
/// 支持十进制（含符号、小数、指数）、0x/0o/0b 整数以及 `Infinity`。
#[must_use]
pub fn looks_numeric(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    if matches!(value, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    DECIMAL_RE.is_match(value) || RADIX_RE.is_match(value)
}
