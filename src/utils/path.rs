//! 路径显示工具
//!
//! 报表头部和错误信息中的路径按词法规则规范化后再输出，
//! 不访问文件系统。

use std::path::{Component, Path, PathBuf};

/// 词法规范化路径
///
/// 合并重复分隔符、去掉末尾分隔符和 `.` 组件；`..` 原样保留。
/// 规范化后为空时返回 `.`。
///
/// # 示例
///
/// ```
/// use std::path::Path;
/// use auth_log_analyzer::utils::path::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new("./auth.log")), Path::new("auth.log"));
/// assert_eq!(normalize_display_path(Path::new("a//b/")), Path::new("a/b"));
/// ```
pub fn normalize_display_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
