pub mod config;
pub mod frequency_table;
pub mod login_event;


// 重新导出核心类型
pub use config::AnalyzerConfig;
pub use frequency_table::FrequencyTable;
pub use login_event::{LoginEvent, LoginOutcome};
