//! 通用工具函数模块

pub mod encoding;
pub mod path;

pub use encoding::{decode_log_line, EncodingInfo, InvalidBytePolicy};
pub use path::normalize_display_path;
