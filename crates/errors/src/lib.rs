//! hissab-errors - 统一错误处理
//!
//! 所有失败最终都可以转换为一条面向用户的提示（toast），没有致命错误

mod field_errors;

pub use field_errors::FieldErrors;

use hissab_common::Notice;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// 是否为校验错误（可由用户修正后重试提交）
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// 校验错误的字段明细
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// 提示标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Error",
            Self::Conflict(_) => "Conflict",
            Self::Storage(_) => "Storage Error",
            Self::Serialization(_) => "Storage Error",
        }
    }

    /// 转换为错误提示
    ///
    /// 校验错误只展示第一条字段消息，其余错误展示完整描述
    pub fn to_notice(&self) -> Notice {
        let description = match self {
            Self::Validation(errors) => errors
                .first_message()
                .unwrap_or("Please check the form and try again")
                .to_string(),
            Self::Conflict(msg) | Self::Storage(msg) | Self::Serialization(msg) => msg.clone(),
        };
        Notice::destructive(self.title(), description)
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
