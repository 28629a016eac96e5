//! 字符编码容错工具
//!
//! 认证日志按 UTF-8 读取，但轮转、截断或混入二进制数据的日志
//! 常常含有无效字节。解码时这些字节按策略跳过或替换，
//! 永远不会让整个分析失败。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 无效字节处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidBytePolicy {
    /// 直接丢弃无效字节
    #[default]
    Skip,
    /// 每段无效字节替换为一个 U+FFFD
    Replace,
}

/// 编码信息（用于日志记录和统计）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingInfo {
    /// 实际使用的解码路径
    pub encoding: &'static str,
    /// 是否包含无效字节
    pub had_errors: bool,
    /// 被跳过或替换的字节数
    pub invalid_bytes: usize,
}

impl EncodingInfo {
    fn clean() -> Self {
        Self {
            encoding: "UTF-8",
            had_errors: false,
            invalid_bytes: 0,
        }
    }
}

/// 解码单行日志（两层容错策略）
///
/// 1. **UTF-8 快速路径**：encoding_rs 校验通过时零拷贝返回
/// 2. **容错路径**：逐段拼接有效 UTF-8，无效字节按 `policy` 跳过或替换
///
/// 不做 BOM 处理，文件首行的 BOM 作为普通字符保留。
///
/// # 示例
///
/// ```
/// use auth_log_analyzer::utils::encoding::{decode_log_line, InvalidBytePolicy};
///
/// let (text, info) = decode_log_line(b"Failed password for r\xffoot", InvalidBytePolicy::Skip);
/// assert_eq!(text, "Failed password for root");
/// assert_eq!(info.encoding, "UTF-8-Lossy");
/// assert_eq!(info.invalid_bytes, 1);
/// ```
pub fn decode_log_line(bytes: &[u8], policy: InvalidBytePolicy) -> (Cow<'_, str>, EncodingInfo) {
    // 第1层：UTF-8 快速路径
    if let Some(text) = encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
    {
        return (text, EncodingInfo::clean());
    }

    // 第2层：逐段容错
    let mut text = String::with_capacity(bytes.len());
    let mut invalid_bytes = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());

        let invalid = chunk.invalid();
        if !invalid.is_empty() {
            invalid_bytes += invalid.len();
            if policy == InvalidBytePolicy::Replace {
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    (
        Cow::Owned(text),
        EncodingInfo {
            encoding: "UTF-8-Lossy",
            had_errors: true,
            invalid_bytes,
        },
    )
}
