//! 销售录入表单

use chrono::NaiveDate;
use hissab_errors::FieldErrors;
use hissab_validation::{FieldSpec, Schema};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::{AMOUNT_TOO_LARGE_MESSAGE, MAX_AMOUNT, rupees};
use crate::domain::entities::SaleDraft;

const PARTY_NAME_MESSAGE: &str = "Party name must be at least 2 characters.";
const BOXES_POSITIVE_MESSAGE: &str = "Number of boxes must be positive.";
const BOXES_INTEGER_MESSAGE: &str = "Number of boxes must be a whole number.";
const BOXES_TOO_LARGE_MESSAGE: &str = "Number of boxes is too large.";
const AMOUNT_POSITIVE_MESSAGE: &str = "Amount must be positive.";

/// 单笔销售的箱数上限
const MAX_BOXES: f64 = 1_000_000.0;
const DATE_MESSAGE: &str = "A date is required.";

pub static SALE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldSpec::text("partyName")
                .required_message(PARTY_NAME_MESSAGE)
                .min_length(2, PARTY_NAME_MESSAGE),
        )
        .field(
            FieldSpec::number("totalBoxes")
                .required_message(BOXES_POSITIVE_MESSAGE)
                .positive(BOXES_POSITIVE_MESSAGE)
                .integer(BOXES_INTEGER_MESSAGE)
                .max(MAX_BOXES, BOXES_TOO_LARGE_MESSAGE),
        )
        .field(
            FieldSpec::number("amount")
                .required_message(AMOUNT_POSITIVE_MESSAGE)
                .positive(AMOUNT_POSITIVE_MESSAGE)
                .max(MAX_AMOUNT, AMOUNT_TOO_LARGE_MESSAGE),
        )
        .field(FieldSpec::date("date").required_message(DATE_MESSAGE))
});

/// 销售录入表单
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForm {
    pub party_name: String,
    pub total_boxes: u32,
    /// 卢比金额，保留提交时的全部小数位
    pub amount: Number,
    pub date: NaiveDate,
}

impl SaleForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        SALE_SCHEMA.parse(input)
    }

    /// 转换为待处理状态的销售草稿
    pub fn into_draft(self) -> Result<SaleDraft, FieldErrors> {
        let amount = rupees("amount", &self.amount)?;
        Ok(SaleDraft::pending(
            self.date,
            self.party_name,
            self.total_boxes,
            amount,
        ))
    }
}
