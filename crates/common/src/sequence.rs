//! 单调递增序号生成器

use std::sync::atomic::{AtomicU64, Ordering};

/// 单调递增的记录序号
///
/// 由存储实例独占持有，序号只增不减，删除或乱序写入都不会产生重复
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// 从 1 开始
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// 从 `last + 1` 开始（用于已有种子数据的存储）
    pub fn starting_after(last: u64) -> Self {
        Self {
            next: AtomicU64::new(last + 1),
        }
    }

    /// 分配下一个序号
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
