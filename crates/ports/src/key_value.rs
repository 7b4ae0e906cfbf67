//! 键值存储 trait 定义

use async_trait::async_trait;
use hissab_errors::AppResult;

/// 持久化键值槽
///
/// 值为不透明字符串；写入无条件覆盖，后写者胜出
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取值
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 写入值（覆盖）
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
}
