//! 销售记录实体

use chrono::NaiveDate;
use hissab_domain_core::{Entity, Money, Record};
use serde::{Deserialize, Serialize};

use crate::domain::enums::SaleStatus;
use crate::domain::value_objects::SaleId;

/// 销售记录
///
/// 表单提交时创建，之后不再修改或删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: SaleId,
    pub date: NaiveDate,
    pub party_name: String,
    pub total_boxes: u32,
    pub total_amount: Money,
    pub status: SaleStatus,
}

/// 待入库的销售记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    pub date: NaiveDate,
    pub party_name: String,
    pub total_boxes: u32,
    pub total_amount: Money,
    pub status: SaleStatus,
}

impl SaleDraft {
    /// 新销售，状态为待处理
    pub fn pending(
        date: NaiveDate,
        party_name: impl Into<String>,
        total_boxes: u32,
        total_amount: Money,
    ) -> Self {
        Self {
            date,
            party_name: party_name.into(),
            total_boxes,
            total_amount,
            status: SaleStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: SaleStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for SaleRecord {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for SaleRecord {
    type Draft = SaleDraft;

    fn from_draft(id: SaleId, draft: SaleDraft) -> Self {
        Self {
            id,
            date: draft.date,
            party_name: draft.party_name,
            total_boxes: draft.total_boxes,
            total_amount: draft.total_amount,
            status: draft.status,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.party_name.as_str(), self.status.as_str()]
    }
}
