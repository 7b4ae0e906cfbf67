//! 记录存储 trait 定义

use async_trait::async_trait;
use hissab_domain_core::Record;
use hissab_errors::AppResult;

/// 只追加的有序记录存储
///
/// 记录 ID 由存储自身分配，调用方只提交草稿
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// 追加一条记录，返回分配了 ID 的记录
    async fn append(&self, draft: R::Draft) -> AppResult<R>;

    /// 按插入顺序返回全部记录
    async fn list(&self) -> AppResult<Vec<R>>;

    /// 搜索字段包含查询串（大小写不敏感）的记录，保持插入顺序
    ///
    /// 空查询返回全部记录
    async fn filter(&self, query: &str) -> AppResult<Vec<R>>;

    /// 追加一条记录，返回追加后的完整序列
    async fn add(&self, draft: R::Draft) -> AppResult<Vec<R>> {
        self.append(draft).await?;
        self.list().await
    }
}
