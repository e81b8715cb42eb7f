//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 写入测试用的日志文件
#[allow(dead_code)]
pub fn create_test_log(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 典型的 Spring Boot + MyBatis 调试日志
#[allow(dead_code)]
pub const SAMPLE_MYBATIS_LOG: &str = r#"2025-09-16 20:02:53.562 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById         : ==>  Preparing: SELECT id, name FROM users WHERE id = ? AND status = ?
2025-09-16 20:02:53.563 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById         : ==> Parameters: 42(Long), ACTIVE(String)
2025-09-16 20:02:53.570 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById         : <==      Total: 1
2025-09-16 20:02:53.580 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.OrderMapper.insert            : ==>  Preparing: INSERT INTO orders (user_id, note, paid) VALUES (?, ?, ?)
2025-09-16 20:02:53.581 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.OrderMapper.insert            : ==> Parameters: 42(Long), It\'s urgent(String), true(Boolean)
2025-09-16 20:02:53.590 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.OrderMapper.insert            : <==    Updates: 1
"#;

/// `SAMPLE_MYBATIS_LOG` 的期望转换结果
#[allow(dead_code)]
pub const SAMPLE_EXPECTED_SQL: &str = "SELECT id, name\nFROM users\nWHERE id = 42\n  AND status = 'ACTIVE';\n\nINSERT INTO orders (user_id, note, paid)\nVALUES (42, 'It's urgent', true);";
