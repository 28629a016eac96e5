//! 频率表
//!
//! 字符串键（用户名或 IP）到出现次数的映射。
//! 迭代顺序为键首次出现的顺序，排名时同频的键按该顺序排列。

use std::collections::HashMap;
use std::sync::Arc;

/// 按插入顺序记录键的计数表
///
/// 只支持递增，不支持删除；容量无上限。
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// 键 -> entries 下标
    index: HashMap<Arc<str>, usize>,
    /// 按首次出现顺序排列的 (键, 计数)
    entries: Vec<(Arc<str>, u64)>,
    /// 所有计数之和
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计数加一，返回该键的新计数
    pub fn increment(&mut self, key: &str) -> u64 {
        self.total += 1;

        if let Some(&slot) = self.index.get(key) {
            let entry = &mut self.entries[slot];
            entry.1 += 1;
            return entry.1;
        }

        let key: Arc<str> = Arc::from(key);
        self.index.insert(Arc::clone(&key), self.entries.len());
        self.entries.push((key, 1));
        1
    }

    /// 查询计数，不存在的键返回 0
    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// 不同键的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有计数之和，等于 increment 调用次数
    pub fn total(&self) -> u64 {
        self.total
    }

    /// 按首次出现顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(key, count)| (key.as_ref(), *count))
    }

    /// 取计数最高的 `limit` 个条目
    ///
    /// 按计数降序排列；计数相同的键保持首次出现顺序（稳定排序）。
    pub fn top(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}
