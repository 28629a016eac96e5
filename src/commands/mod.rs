//! 命令层
//!
//! 命令行入口调用的命令实现。

pub mod analyze;
