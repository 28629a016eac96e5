/*!
 * 日志与诊断模块
 */
pub mod tracing_config;

pub use tracing_config::{filter_directive, init_tracing};
