//! 报表输出
//!
//! 将频率表渲染为人类可读的 Top-N 文本块。

use std::io::{self, Write};
use std::path::Path;

use crate::models::config::ReportConfig;
use crate::models::FrequencyTable;
use crate::services::login_aggregator::LoginStatistics;
use crate::utils::path::normalize_display_path;

pub const FAILED_IPS_TITLE: &str = "Top source IPs (failed logins)";
pub const FAILED_USERS_TITLE: &str = "Usernames targeted (failed logins)";
pub const SUCCESS_USERS_TITLE: &str = "Users with successful logins";
pub const SUCCESS_IPS_TITLE: &str = "Source IPs with successful logins";

/// 标题下分隔线的宽度
const RULE_WIDTH: usize = 40;

/// Top-N 报表输出器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPrinter {
    limit: usize,
    key_width: usize,
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl ReportPrinter {
    pub fn new(limit: usize, key_width: usize) -> Self {
        Self { limit, key_width }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.limit, config.key_width)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 输出单个频率表的 Top-N
    ///
    /// 空表只输出一行 `"<title>: none"`，不带结尾空行；
    /// 否则输出标题、每个条目一行，最后一个空行分隔下一个报表。
    pub fn write_top<W: Write>(
        &self,
        out: &mut W,
        table: &FrequencyTable,
        title: &str,
    ) -> io::Result<()> {
        if table.is_empty() {
            return writeln!(out, "{}: none", title);
        }

        writeln!(out, "{}", title)?;
        for (key, count) in table.top(self.limit) {
            writeln!(out, "  {:<width$} {}", key, count, width = self.key_width)?;
        }
        writeln!(out)
    }

    /// 输出分析头部，路径按词法规范化
    pub fn write_header<W: Write>(&self, out: &mut W, path: &Path) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Analysis of {}", normalize_display_path(path).display())?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))
    }

    /// 按固定顺序输出头部和四个报表
    pub fn write_analysis<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        stats: &LoginStatistics,
    ) -> io::Result<()> {
        self.write_header(out, path)?;
        self.write_top(out, &stats.failed_ips, FAILED_IPS_TITLE)?;
        self.write_top(out, &stats.failed_users, FAILED_USERS_TITLE)?;
        self.write_top(out, &stats.success_users, SUCCESS_USERS_TITLE)?;
        self.write_top(out, &stats.success_ips, SUCCESS_IPS_TITLE)?;
        out.flush()
    }
}
