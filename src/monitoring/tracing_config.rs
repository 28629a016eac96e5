/*!
 * 日志订阅器配置
 *
 * 所有诊断日志写入 stderr，stdout 只包含分析报表。
 */

use tracing_subscriber::EnvFilter;

/// 根据 `-v` 次数选择过滤指令，未指定时使用配置文件中的级别
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// 初始化 tracing 订阅器
///
/// 设置了 `RUST_LOG` 时以环境变量为准，否则使用 `directive`；
/// 指令无法解析时回退到 `warn`。重复初始化返回 `false`。
pub fn init_tracing(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0, "warn"), "warn");
        assert_eq!(filter_directive(0, "auth_log_analyzer=debug"), "auth_log_analyzer=debug");
        assert_eq!(filter_directive(1, "warn"), "info");
        assert_eq!(filter_directive(2, "warn"), "debug");
        assert_eq!(filter_directive(5, "warn"), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let _ = init_tracing("warn");
        assert!(!init_tracing("debug"));
    }
}
