//! 生产批次记录实体

use chrono::NaiveDate;
use hissab_domain_core::{Entity, Record};
use serde::{Deserialize, Serialize};

use crate::domain::enums::{LotSize, ProductionStatus};
use crate::domain::value_objects::ProductionId;

/// 生产批次记录
///
/// 跟踪一个批次从裁剪、缝制（silai）到熨烫的进度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub id: ProductionId,
    pub date: NaiveDate,
    pub lot_no: String,
    pub size: LotSize,
    pub cutting_master: String,
    pub silai_kariger: String,
    pub last_date: Option<NaiveDate>,
    /// 面料是否已到
    pub maal_aaya: bool,
    pub press_date: Option<NaiveDate>,
    pub press_kariger: Option<String>,
    pub status: ProductionStatus,
}

/// 待入库的生产批次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionDraft {
    pub date: NaiveDate,
    pub lot_no: String,
    pub size: LotSize,
    pub cutting_master: String,
    pub silai_kariger: String,
    pub last_date: Option<NaiveDate>,
    pub maal_aaya: bool,
    pub press_date: Option<NaiveDate>,
    pub press_kariger: Option<String>,
    pub status: ProductionStatus,
}

impl Entity for ProductionRecord {
    type Id = ProductionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for ProductionRecord {
    type Draft = ProductionDraft;

    fn from_draft(id: ProductionId, draft: ProductionDraft) -> Self {
        Self {
            id,
            date: draft.date,
            lot_no: draft.lot_no,
            size: draft.size,
            cutting_master: draft.cutting_master,
            silai_kariger: draft.silai_kariger,
            last_date: draft.last_date,
            maal_aaya: draft.maal_aaya,
            press_date: draft.press_date,
            press_kariger: draft.press_kariger,
            status: draft.status,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.lot_no.as_str(),
            self.size.as_str(),
            self.cutting_master.as_str(),
            self.silai_kariger.as_str(),
            self.status.as_str(),
        ]
    }
}
