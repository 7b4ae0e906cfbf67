//! 收支类型

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 收支类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// 收入
    #[default]
    #[display("income")]
    Income,
    /// 支出
    #[display("expense")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}
