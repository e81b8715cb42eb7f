//! `Parameters:` 行解析
//!
//! 参数之间用逗号分隔，每个参数形如 `value(Type)`。
//! 直接按逗号切分，值本身含逗号的参数（如 `Smith, John(String)`）会被拆开，
//! 这是日志格式决定的已知限制。

use crate::mybatis::types::Parameter;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `value(Type)`：贪婪匹配值，类型为末尾括号内不含 `)` 的部分
    static ref TYPED_PARAM_RE: Regex = Regex::new(r"^(.+)\(([^)]+)\)$").unwrap();
}

/// 解析 `Parameters:` 之后的文本，得到按顺序排列的参数列表。
///
/// 空串返回空列表；没有类型括号的片段整体作为值，类型为空串。
#[must_use]
pub fn parse_parameters_line(params: &str) -> Vec<Parameter> {
    let params = params.trim();
    if params.is_empty() {
        return Vec::new();
    }

    params.split(',').map(parse_parameter).collect()
}

/// 解析单个参数片段
#[must_use]
pub fn parse_parameter(segment: &str) -> Parameter {
    let trimmed = segment.trim();
    match TYPED_PARAM_RE.captures(trimmed) {
        Some(caps) => Parameter::new(caps[1].trim(), caps[2].trim()),
        None => Parameter::new(trimmed, ""),
    }
}
