//! 用户资料仓储接口

use async_trait::async_trait;
use hissab_errors::AppResult;

use crate::domain::entities::UserProfile;

/// 用户资料仓储接口
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 读取资料；未保存过或内容损坏时返回默认资料
    async fn load(&self) -> AppResult<UserProfile>;

    /// 整体覆盖保存（后写者胜出）
    async fn save(&self, profile: &UserProfile) -> AppResult<()>;
}
