//! 日志扫描器
//!
//! 逐行流式读取日志文件，经解码、分类后累积到 [`LoginStatistics`]。
//! 文件句柄的生命周期限定在 [`LogScanner::scan_path`] 内部。

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::{AppError, Result};
use crate::services::line_classifier::classify;
use crate::services::login_aggregator::LoginStatistics;
use crate::utils::encoding::{decode_log_line, InvalidBytePolicy};

/// 日志扫描器
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScanner {
    policy: InvalidBytePolicy,
}

impl LogScanner {
    pub fn new(policy: InvalidBytePolicy) -> Self {
        Self { policy }
    }

    /// 扫描指定路径的日志文件
    ///
    /// # Errors
    /// * `AppError::LogFileNotFound` - 路径不存在或不是普通文件
    /// * `AppError::Io` - 打开或读取失败
    pub fn scan_path(&self, path: &Path) -> Result<LoginStatistics> {
        if !path.is_file() {
            return Err(AppError::log_file_not_found(path));
        }

        debug!(path = %path.display(), policy = ?self.policy, "Scanning log file");
        let file = File::open(path)?;
        let stats = self.scan_reader(BufReader::new(file))?;

        let summary = &stats.summary;
        info!(
            path = %path.display(),
            lines = summary.lines_read,
            failed = summary.failed_attempts,
            accepted = summary.successful_logins,
            unmatched = summary.unmatched_lines,
            invalid_byte_lines = summary.lines_with_invalid_bytes,
            "Scan complete"
        );
        Ok(stats)
    }

    /// 扫描任意缓冲读取器
    ///
    /// 行边界遵循通用换行规则：`\n`、`\r\n` 和单独的 `\r` 都结束一行。
    pub fn scan_reader<R: BufRead>(&self, mut reader: R) -> io::Result<LoginStatistics> {
        let mut stats = LoginStatistics::new();
        let mut buf = Vec::with_capacity(256);

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let chunk = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
            for line in chunk.split(|&b| b == b'\r') {
                self.scan_line(line, &mut stats);
            }
        }

        Ok(stats)
    }

    fn scan_line(&self, bytes: &[u8], stats: &mut LoginStatistics) {
        let (text, encoding) = decode_log_line(bytes, self.policy);
        if encoding.had_errors {
            trace!(
                encoding = encoding.encoding,
                invalid_bytes = encoding.invalid_bytes,
                line = stats.summary.lines_read + 1,
                "Decoded line with invalid bytes"
            );
            stats.note_invalid_bytes();
        }

        match classify(&text) {
            Some(event) => {
                trace!(event = %event, "Classified login line");
                stats.record(&event);
            }
            None => stats.record_unmatched(),
        }
    }
}
