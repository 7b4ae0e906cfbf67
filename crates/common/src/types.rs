//! 通用类型定义

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 提示样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    #[display("default")]
    Default,
    #[display("destructive")]
    Destructive,
}

/// 面向用户的提示消息（toast）
///
/// 操作成功和失败最终都以一条提示呈现给用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NoticeVariant,
}

impl Notice {
    /// 普通提示
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    /// 错误提示
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}
