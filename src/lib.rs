//! Auth Log Analyzer
//!
//! 扫描 auth.log 风格的认证日志，统计 SSH 密码登录的失败/成功次数，
//! 并按来源 IP 和用户名输出 Top-N 报表。
//!
//! 处理流程：解码 → 分类 → 计数 → 排名 → 输出。

pub mod commands;
pub mod error;
pub mod models;
pub mod monitoring;
pub mod services;
pub mod utils;

#[cfg(test)]
mod proptest_strategies;

pub use commands::analyze::{analyze_log, run_analysis};
pub use error::{AppError, Result};
