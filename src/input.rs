//! 输入读取
//!
//! 日志文本来自命令行给出的文件，未给出文件或文件名为 `-` 时读取标准输入。

use crate::error::Result;
use std::io::{self, Read};
use std::path::Path;

/// 表示标准输入的文件名
pub const STDIN_MARKER: &str = "-";

/// 读取日志文本，`path` 为 `None` 或 `-` 时读取标准输入
pub fn read_log_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new(STDIN_MARKER) => read_log_file(p),
        _ => read_log_from(io::stdin().lock()),
    }
}

/// 读取日志文件
///
/// 非 UTF-8 内容按有损方式转换，不会因为个别字节失败。
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    #[cfg(feature = "logging")]
    tracing::trace!(path = %path.as_ref().display(), len = bytes.len(), "读取日志文件");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 从任意读取器读取全部日志文本
pub fn read_log_from<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
