//! 生产批次状态

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 生产批次状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display)]
pub enum ProductionStatus {
    /// 待开工
    #[default]
    Pending,
    /// 生产中
    #[serde(rename = "In Progress")]
    #[display("In Progress")]
    InProgress,
    /// 已完成
    Completed,
}

impl ProductionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionStatus::Pending => "Pending",
            ProductionStatus::InProgress => "In Progress",
            ProductionStatus::Completed => "Completed",
        }
    }
}
