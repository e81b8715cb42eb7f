//! 行扫描与语句配对
//!
//! 单次前向扫描，只保留一个待配对的 `Preparing:` 模板：
//!
//! ```text
//! 原始行 → trim/去前缀 → process_line()
//!                            ├─ Preparing:  → flush_pending() → 记为待配对模板
//!                            ├─ Parameters: → 与待配对模板组成 Statement（无模板则丢弃）
//!                            └─ 其他行      → 忽略
//! 输入结束 → finish() → 残留模板以空参数列表输出
//! ```

use crate::mybatis::params::parse_parameters_line;
use crate::mybatis::types::Statement;
use lazy_static::lazy_static;
use regex::Regex;

const PREPARING_MARKER: &str = "Preparing:";
const PARAMETERS_MARKER: &str = "Parameters:";

lazy_static! {
    /// MyBatis 日志行开头的 `==>` / `==` 箭头
    static ref ARROW_PREFIX_RE: Regex = Regex::new(r"^==>?\s*").unwrap();
}

/// 语句扫描器，保存扫描过程中的状态
#[derive(Debug, Default)]
pub struct StatementScanner {
    /// 尚未遇到 `Parameters:` 的模板
    pending: Option<String>,
    statements: Vec<Statement>,
}

impl StatementScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有待配对的模板
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 处理一行（调用方保证已 trim 且非空）
    pub fn process_line(&mut self, line: &str) {
        let line = ARROW_PREFIX_RE.replace(line, "");

        if let Some((_, sql)) = line.split_once(PREPARING_MARKER) {
            self.flush_pending();
            let sql = sql.trim();
            // 空模板不参与配对
            if !sql.is_empty() {
                self.pending = Some(sql.to_string());
            }
        } else if let Some((_, params)) = line.split_once(PARAMETERS_MARKER) {
            let parameters = parse_parameters_line(params);
            match self.pending.take() {
                Some(template) => {
                    #[cfg(feature = "logging")]
                    tracing::trace!(
                        params = parameters.len(),
                        "Preparing/Parameters 配对成功"
                    );
                    self.statements.push(Statement::new(template, parameters));
                }
                None => {
                    #[cfg(feature = "logging")]
                    tracing::debug!(
                        params = parameters.len(),
                        "丢弃没有对应 Preparing 的 Parameters 行"
                    );
                }
            }
        }
    }

    /// 把待配对模板以空参数列表输出
    fn flush_pending(&mut self) {
        if let Some(template) = self.pending.take() {
            #[cfg(feature = "logging")]
            tracing::debug!(template = %template, "Preparing 没有对应的 Parameters 行");
            self.statements.push(Statement::new(template, Vec::new()));
        }
    }

    /// 结束扫描，返回按出现顺序排列的语句
    #[must_use]
    pub fn finish(mut self) -> Vec<Statement> {
        self.flush_pending();
        self.statements
    }
}

/// 扫描整段日志文本，提取语句
#[must_use]
pub fn scan_statements(text: &str) -> Vec<Statement> {
    let mut scanner = StatementScanner::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        scanner.process_line(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mybatis::types::Parameter;

    #[test]
    fn test_pair_with_arrow_prefix() {
        let log = "==>  Preparing: SELECT * FROM t WHERE id = ?\n==> Parameters: 1(Integer)\n<==      Total: 1";
        let stmts = scan_statements(log);
        assert_eq!(
            stmts,
            vec![Statement::new(
                "SELECT * FROM t WHERE id = ?",
                vec![Parameter::new("1", "Integer")]
            )]
        );
    }

    #[test]
    fn test_marker_inside_full_log_line() {
        let log = "2024-01-01 10:00:00.000 DEBUG [main] c.e.UserMapper.select - ==>  Preparing: SELECT 1\n\
                   2024-01-01 10:00:00.001 DEBUG [main] c.e.UserMapper.select - ==> Parameters: ";
        let stmts = scan_statements(log);
        assert_eq!(stmts, vec![Statement::new("SELECT 1", vec![])]);
    }

    #[test]
    fn test_consecutive_preparing_flushes_previous() {
        let log = "Preparing: SELECT a FROM t\nPreparing: SELECT b FROM t WHERE id = ?\nParameters: 2(Long)";
        let stmts = scan_statements(log);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].parameters.is_empty());
        assert_eq!(stmts[1].parameters, vec![Parameter::new("2", "Long")]);
    }

    #[test]
    fn test_orphan_parameters_dropped() {
        let log = "Parameters: 1(Integer)\nPreparing: SELECT 1";
        let stmts = scan_statements(log);
        assert_eq!(stmts, vec![Statement::new("SELECT 1", vec![])]);
    }

    #[test]
    fn test_non_adjacent_parameters_still_pair() {
        // 中间的普通行被忽略，不会打断配对
        let log = "Preparing: SELECT ?\nsome noise\nParameters: 5(Integer)";
        let stmts = scan_statements(log);
        assert_eq!(stmts[0].parameters.len(), 1);
    }

    #[test]
    fn test_trailing_pending_flushed() {
        let mut scanner = StatementScanner::new();
        scanner.process_line("Preparing: DELETE FROM t WHERE id = ?");
        assert!(scanner.has_pending());
        let stmts = scanner.finish();
        assert_eq!(stmts.len(), 1);
        assert!(stmts[0].parameters.is_empty());
    }

    #[test]
    fn test_empty_template_ignored() {
        let log = "Preparing:   \nParameters: 1(Integer)";
        assert!(scan_statements(log).is_empty());
    }

    #[test]
    fn test_no_statements() {
        assert!(scan_statements("hello\nworld").is_empty());
        assert!(scan_statements("").is_empty());
    }
}
