//! 实体基础 trait

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 记录主键：由存储持有的单调序号生成
pub trait RecordKey:
    Copy + Eq + Hash + Debug + Display + From<u64> + Into<u64> + Send + Sync + 'static
{
}

impl<T> RecordKey for T where
    T: Copy + Eq + Hash + Debug + Display + From<u64> + Into<u64> + Send + Sync + 'static
{
}

/// 只追加的业务记录（销售、生产批次、收支流水）
///
/// 记录由表单草稿 + 存储分配的 ID 组装而成，创建后不再修改
pub trait Record: Entity<Id: RecordKey> + Clone + Send + Sync + 'static {
    /// 尚未分配 ID 的记录内容
    type Draft: Send + 'static;

    /// 用分配好的 ID 组装记录
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// 参与关键字搜索的字段
    fn search_fields(&self) -> Vec<&str>;
}
