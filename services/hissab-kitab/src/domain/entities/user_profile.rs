//! 用户资料实体

use serde::{Deserialize, Serialize};

use crate::domain::enums::UserRole;

/// 用户资料
///
/// 每个存储槽只有一份，保存时整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
    pub profile_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl UserProfile {
    /// 头像占位字符：姓名首字母，姓名为空时为 "U"
    pub fn avatar_initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}
