//! 分析命令
//!
//! 串联扫描与报表：先完整扫描文件，再输出头部和四个报表。
//! 文件不存在时在输出任何内容之前失败。

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::config::AnalyzerConfig;
use crate::services::log_scanner::LogScanner;
use crate::services::login_aggregator::LoginStatistics;
use crate::services::report_printer::ReportPrinter;

/// 使用默认配置扫描日志文件，返回统计结果
pub fn analyze_log(path: &Path) -> Result<LoginStatistics> {
    LogScanner::default().scan_path(path)
}

/// 扫描日志文件并将报表写入 `out`
///
/// # Errors
/// * `AppError::LogFileNotFound` - 此时 `out` 不会被写入任何内容
/// * `AppError::Io` - 读取日志或写出报表失败
pub fn run_analysis<W: Write>(
    log_path: &Path,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<LoginStatistics> {
    let stats = LogScanner::new(config.input.invalid_bytes).scan_path(log_path)?;

    let printer = ReportPrinter::from_config(&config.report);
    debug!(limit = printer.limit(), "Writing report");
    printer.write_analysis(out, log_path, &stats)?;

    Ok(stats)
}
