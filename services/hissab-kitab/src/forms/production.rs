//! 生产批次录入表单

use chrono::NaiveDate;
use hissab_errors::FieldErrors;
use hissab_validation::{FieldSpec, Schema};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::ProductionDraft;
use crate::domain::enums::{LotSize, ProductionStatus};

const DATE_MESSAGE: &str = "A date is required.";
const LOT_NO_MESSAGE: &str = "Lot number must be at least 2 characters.";
const SIZE_MESSAGE: &str = "Size is required.";
const CUTTING_MASTER_MESSAGE: &str = "Cutting master name is required.";
const SILAI_KARIGER_MESSAGE: &str = "Silai kariger name is required.";

pub static PRODUCTION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(FieldSpec::date("date").required_message(DATE_MESSAGE))
        .field(
            FieldSpec::text("lotNo")
                .required_message(LOT_NO_MESSAGE)
                .min_length(2, LOT_NO_MESSAGE),
        )
        .field(
            FieldSpec::text("size")
                .required_message(SIZE_MESSAGE)
                .one_of(LotSize::labels(), SIZE_MESSAGE),
        )
        .field(
            FieldSpec::text("cuttingMaster")
                .required_message(CUTTING_MASTER_MESSAGE)
                .min_length(2, CUTTING_MASTER_MESSAGE),
        )
        .field(
            FieldSpec::text("silaiKariger")
                .required_message(SILAI_KARIGER_MESSAGE)
                .min_length(2, SILAI_KARIGER_MESSAGE),
        )
        .field(FieldSpec::date("lastDate").optional())
        .field(FieldSpec::boolean("maalAaya").default_value(false))
        .field(FieldSpec::date("pressDate").optional())
        .field(FieldSpec::text("pressKariger").optional())
});

/// 生产批次录入表单
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionForm {
    pub date: NaiveDate,
    pub lot_no: String,
    pub size: LotSize,
    pub cutting_master: String,
    pub silai_kariger: String,
    pub last_date: Option<NaiveDate>,
    pub maal_aaya: bool,
    pub press_date: Option<NaiveDate>,
    pub press_kariger: Option<String>,
}

impl ProductionForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        PRODUCTION_SCHEMA.parse(input)
    }

    /// 转换为草稿；新批次一律为待开工，与输入无关
    pub fn into_draft(self) -> ProductionDraft {
        ProductionDraft {
            date: self.date,
            lot_no: self.lot_no,
            size: self.size,
            cutting_master: self.cutting_master,
            silai_kariger: self.silai_kariger,
            last_date: self.last_date,
            maal_aaya: self.maal_aaya,
            press_date: self.press_date,
            press_kariger: self.press_kariger.filter(|name| !name.trim().is_empty()),
            status: ProductionStatus::Pending,
        }
    }
}
