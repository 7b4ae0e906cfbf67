//! 用户角色

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display)]
pub enum UserRole {
    /// 工人
    #[default]
    #[serde(alias = "worker")]
    Worker,
    /// 老板
    #[serde(alias = "owner")]
    Owner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Worker => "Worker",
            UserRole::Owner => "Owner",
        }
    }

    /// 宽松解析：只有 Owner（不区分大小写）识别为老板，其余一律视为工人
    pub fn from_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("owner") {
            UserRole::Owner
        } else {
            UserRole::Worker
        }
    }
}
