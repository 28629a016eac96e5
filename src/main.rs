//! Auth Log Analyzer - 命令行入口
//!
//! 负责：
//! - 解析命令行参数
//! - 加载配置并初始化日志系统
//! - 执行分析并把报表写到 stdout

use std::io;
use std::path::PathBuf;

use auth_log_analyzer::commands::analyze::run_analysis;
use auth_log_analyzer::models::config::AnalyzerConfig;
use auth_log_analyzer::monitoring::{filter_directive, init_tracing};
use clap::{ArgAction, Parser};
use tracing::{debug, info};

/// Analyze SSH login attempts in an auth.log-style file.
#[derive(Parser, Debug)]
#[command(name = "auth-log-analyzer", version)]
struct Cli {
    /// Path to the log file (e.g. /var/log/auth.log)
    #[arg(value_name = "LOGFILE")]
    logfile: PathBuf,

    /// Number of entries shown in each report (overrides the config file)
    #[arg(short = 'n', long = "top", value_name = "N")]
    top: Option<usize>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raise diagnostic verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // 日志级别来自配置文件，订阅器只能在配置加载后初始化
    let config = AnalyzerConfig::load(cli.config.as_deref())?.with_limit(cli.top)?;
    init_tracing(&filter_directive(cli.verbose, &config.logging.level));

    info!("Auth Log Analyzer v{} - 启动中...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &cli.config {
        info!("Loaded analyzer configuration from: {}", path.display());
    }
    debug!(
        limit = config.report.limit,
        key_width = config.report.key_width,
        invalid_bytes = ?config.input.invalid_bytes,
        "Analyzer configuration validated"
    );

    let mut stdout = io::stdout().lock();
    run_analysis(&cli.logfile, &config, &mut stdout)?;

    Ok(())
}
