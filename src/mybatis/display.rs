//! 参数替换与展示格式化
//!
//! 关键字换行是纯文本替换，不解析 SQL 语法，字符串字面量里的 `from`、`and`
//! 之类同样会被换行。结果只用于阅读，不保证可以执行。

use crate::mybatis::types::Statement;
use crate::mybatis::value::format_parameter;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 按顺序应用的关键字换行规则：(匹配正则, 替换文本)
    static ref KEYWORD_BREAKS: Vec<(Regex, &'static str)> = [
        ("SELECT", "\nSELECT "),
        ("FROM", "\nFROM "),
        ("WHERE", "\nWHERE "),
        ("AND", "\n  AND "),
        ("OR", "\n  OR "),
        ("LEFT JOIN", "\nLEFT JOIN "),
        ("INNER JOIN", "\nINNER JOIN "),
        ("INSERT INTO", "\nINSERT INTO "),
        ("VALUES", "\nVALUES "),
    ]
    .into_iter()
    .map(|(keyword, replacement)| {
        let re = Regex::new(&format!(r"(?i)\s+{keyword}\s+")).unwrap();
        (re, replacement)
    })
    .collect();
}

/// 依次用参数替换模板中的 `?`。
///
/// 参数用完后剩余的 `?` 原样保留；多出的参数被忽略。
/// 已替换进去的值里即使含有 `?` 也不会再被当作占位符。
#[must_use]
pub fn substitute_parameters(statement: &Statement) -> String {
    let template = statement.template.as_str();
    let mut params = statement.parameters.iter();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('?') {
        let Some(param) = params.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(&format_parameter(param));
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
    out
}

/// 在常见关键字前插入换行，`AND` / `OR` 额外缩进两格，最后去掉首尾空白
#[must_use]
pub fn format_sql_display(sql: &str) -> String {
    let mut formatted = sql.to_string();
    for (re, replacement) in KEYWORD_BREAKS.iter() {
        // NoExpand：替换文本中的 `$` 不作为捕获组引用
        formatted = re
            .replace_all(&formatted, regex::NoExpand(*replacement))
            .into_owned();
    }
    formatted.trim().to_string()
}

/// 末尾（忽略尾部空白）没有分号时补上一个
#[must_use]
pub fn ensure_semicolon(mut sql: String) -> String {
    if !sql.trim_end().ends_with(';') {
        sql.push(';');
    }
    sql
}
