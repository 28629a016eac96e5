//! 频率聚合器
//!
//! 四个互相独立的频率表，在整次扫描中累积计数：
//! 失败登录按 IP / 用户名，成功登录按用户名 / IP。

use crate::models::{FrequencyTable, LoginEvent, LoginOutcome};

/// 扫描摘要
///
/// 只写入日志，不影响标准输出的报表格式。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// 读取的总行数
    pub lines_read: u64,
    /// 失败登录行数
    pub failed_attempts: u64,
    /// 成功登录行数
    pub successful_logins: u64,
    /// 无法识别的行数
    pub unmatched_lines: u64,
    /// 含无效字节的行数
    pub lines_with_invalid_bytes: u64,
}

/// 登录统计
#[derive(Debug, Clone, Default)]
pub struct LoginStatistics {
    pub failed_ips: FrequencyTable,
    pub failed_users: FrequencyTable,
    pub success_users: FrequencyTable,
    pub success_ips: FrequencyTable,
    pub summary: ScanSummary,
}

impl LoginStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个登录事件
    pub fn record(&mut self, event: &LoginEvent<'_>) {
        self.summary.lines_read += 1;
        match event.outcome {
            LoginOutcome::Failed => {
                self.failed_ips.increment(event.ip);
                self.failed_users.increment(event.user);
                self.summary.failed_attempts += 1;
            }
            LoginOutcome::Succeeded => {
                self.success_users.increment(event.user);
                self.success_ips.increment(event.ip);
                self.summary.successful_logins += 1;
            }
        }
    }

    /// 记录一行无法识别的日志
    pub fn record_unmatched(&mut self) {
        self.summary.lines_read += 1;
        self.summary.unmatched_lines += 1;
    }

    /// 标记最近一行含有无效字节
    pub fn note_invalid_bytes(&mut self) {
        self.summary.lines_with_invalid_bytes += 1;
    }

    /// 是否没有任何登录事件
    pub fn is_empty(&self) -> bool {
        self.failed_ips.is_empty() && self.success_users.is_empty()
    }
}
