//! 销售状态

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 销售状态
///
/// 新建销售一律为 `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display)]
pub enum SaleStatus {
    /// 待处理
    #[default]
    Pending,
    /// 处理中
    Processing,
    /// 已发货
    Delivered,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::Processing => "Processing",
            SaleStatus::Delivered => "Delivered",
        }
    }
}
