//! 分析器配置
//!
//! 支持从 TOML 文件加载，所有字段都有默认值，
//! 因此部分填写或缺省的配置文件同样有效。
//! 优先级：内置默认值 < 配置文件 < 命令行参数。

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{eyre_to_app_error, AppError};
use crate::utils::encoding::InvalidBytePolicy;

/// 分析器配置根结构
#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzerConfig {
    /// 报表配置
    #[serde(default)]
    #[validate(nested)]
    pub report: ReportConfig,
    /// 输入解码配置
    #[serde(default)]
    pub input: InputConfig,
    /// 日志配置
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// 报表配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportConfig {
    /// 每个报表输出的条目数上限
    #[serde(default = "default_report_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: usize,
    /// 键列的对齐宽度
    #[serde(default = "default_key_width")]
    #[validate(range(min = 1, max = 256))]
    pub key_width: usize,
}

fn default_report_limit() -> usize {
    5
}

fn default_key_width() -> usize {
    20
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: default_report_limit(),
            key_width: default_key_width(),
        }
    }
}

/// 输入解码配置
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// 无效字节的处理方式
    #[serde(default)]
    pub invalid_bytes: InvalidBytePolicy,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// 未设置 RUST_LOG 时使用的过滤指令
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1, max = 100))]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AnalyzerConfig {
    /// 从 TOML 文件加载配置
    ///
    /// # Errors
    /// 如果文件不存在或格式错误，返回错误
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse TOML config: {}", path.display()))?;

        Ok(config)
    }

    /// 加载配置：未指定文件时使用默认配置
    pub fn load(path: Option<&Path>) -> crate::error::Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml_file(path).map_err(eyre_to_app_error)?,
            None => Self::default(),
        };
        config.ensure_valid()?;
        Ok(config)
    }

    /// 应用命令行覆盖项后重新验证
    pub fn with_limit(mut self, limit: Option<usize>) -> crate::error::Result<Self> {
        if let Some(limit) = limit {
            self.report.limit = limit;
        }
        self.ensure_valid()?;
        Ok(self)
    }

    /// 验证配置
    ///
    /// # Errors
    /// 如果配置值超出允许范围，返回 `AppError::Validation`
    pub fn ensure_valid(&self) -> crate::error::Result<()> {
        self.validate()
            .map_err(|e| AppError::validation_error(e.to_string()))?;
        Ok(())
    }
}
