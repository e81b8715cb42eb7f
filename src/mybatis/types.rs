//! MyBatis 日志转换涉及的数据结构

use serde::Serialize;

/// 未找到任何 `Preparing:` 语句时返回的诊断信息
pub const NO_VALID_LOG_FOUND: &str = "未找到有效的 MyBatis 日志";

/// `Parameters:` 行中的单个参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// 日志中出现的原始值，不包含末尾的 `(类型)` 标注
    pub value: String,
    /// 类型标注，例如 `Integer`、`String`；日志未标注时为空串
    pub type_tag: String,
}

impl Parameter {
    pub fn new<V: Into<String>, T: Into<String>>(value: V, type_tag: T) -> Self {
        Self { value: value.into(), type_tag: type_tag.into() }
    }
}

/// 一条 `Preparing:` 模板及与之配对的参数列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// 含 `?` 占位符的 SQL 模板
    pub template: String,
    /// 按出现顺序排列的参数
    pub parameters: Vec<Parameter>,
}

impl Statement {
    pub fn new<S: Into<String>>(template: S, parameters: Vec<Parameter>) -> Self {
        Self { template: template.into(), parameters }
    }

    /// 模板中 `?` 占位符的数量
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.template.matches('?').count()
    }
}

/// 转换结果，这是对外唯一的产物
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub sql: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    /// 空白输入：失败但不带诊断信息
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// 非空输入中没有可识别的语句
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            sql: String::new(),
            success: false,
            error: Some(NO_VALID_LOG_FOUND.to_string()),
        }
    }

    #[must_use]
    pub fn success(sql: String) -> Self {
        Self { sql, success: true, error: None }
    }
}
