//! 表单定义
//!
//! 每张表单由一个 schema 和一个强类型的解析结果组成。
//! 错误消息即页面上展示给用户的文本。

use hissab_domain_core::{Currency, Money};
use hissab_errors::FieldErrors;
use serde_json::Number;

mod auth;
mod production;
mod profile;
mod sale;
mod transaction;

pub use auth::*;
pub use production::*;
pub use profile::*;
pub use sale::*;
pub use transaction::*;

/// 单笔金额上限（卢比）
pub(crate) const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

pub(crate) const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount is too large.";

/// 按提交的十进制写法换算为卢比金额，不经过浮点舍入
pub(crate) fn rupees(field: &str, amount: &Number) -> Result<Money, FieldErrors> {
    Money::parse(&amount.to_string(), Currency::inr())
        .ok_or_else(|| FieldErrors::single(field, AMOUNT_TOO_LARGE_MESSAGE))
}
