use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::path::normalize_display_path;

/**
 * 应用错误类型 - 使用 miette 提供用户友好的错误诊断
 *
 * 分析过程中唯一“预期”的失败是日志文件不存在；
 * 无法匹配的行和无效字节都属于正常噪声，不会产生错误。
 */
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("Log file not found: {}", .0.display())]
    #[diagnostic(
        code(app::log_file_not_found),
        help("Pass the path of an existing regular file, e.g. /var/log/auth.log")
    )]
    LogFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    #[diagnostic(code(app::io_error))]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(app::config_error),
        help("Check that the configuration file exists and is valid TOML")
    )]
    Config(String),

    #[error("Validation error: {0}")]
    #[diagnostic(
        code(app::validation_error),
        help("Check that configuration values are within their allowed ranges")
    )]
    Validation(String),
}

impl AppError {
    /**
     * 创建日志文件不存在错误（路径按词法规范化）
     */
    pub fn log_file_not_found(path: impl Into<PathBuf>) -> Self {
        AppError::LogFileNotFound(normalize_display_path(&path.into()))
    }

    /**
     * 创建验证错误
     */
    pub fn validation_error(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

/**
 * 统一结果类型
 */
pub type Result<T> = std::result::Result<T, AppError>;

/**
 * 将 eyre::Error 转换为 AppError（保留完整错误链）
 */
pub fn eyre_to_app_error(error: eyre::Error) -> AppError {
    AppError::Config(format!("{:#}", error))
}
