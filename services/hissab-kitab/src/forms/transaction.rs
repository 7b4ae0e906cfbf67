//! 收支录入表单

use chrono::NaiveDate;
use hissab_errors::FieldErrors;
use hissab_validation::{FieldSpec, Schema};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::{AMOUNT_TOO_LARGE_MESSAGE, MAX_AMOUNT, rupees};
use crate::domain::entities::TransactionDraft;
use crate::domain::enums::TransactionKind;

const FILL_REQUIRED_FIELDS: &str = "Please fill in all required fields";
const AMOUNT_POSITIVE_MESSAGE: &str = "Amount must be positive.";

pub static TRANSACTION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(FieldSpec::text("title").required(FILL_REQUIRED_FIELDS))
        .field(
            FieldSpec::number("amount")
                .required_message(FILL_REQUIRED_FIELDS)
                .positive(AMOUNT_POSITIVE_MESSAGE)
                .max(MAX_AMOUNT, AMOUNT_TOO_LARGE_MESSAGE),
        )
        .field(
            FieldSpec::text("type")
                .default_value("income")
                .one_of(["income", "expense"], "Please select a transaction type"),
        )
        .field(FieldSpec::text("category").optional())
        .field(FieldSpec::text("description").optional())
        .field(FieldSpec::date("date").required_message(FILL_REQUIRED_FIELDS))
});

/// 收支录入表单
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    pub title: String,
    pub amount: Number,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl TransactionForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        TRANSACTION_SCHEMA.parse(input)
    }

    pub fn into_draft(self) -> Result<TransactionDraft, FieldErrors> {
        Ok(TransactionDraft {
            amount: rupees("amount", &self.amount)?,
            title: self.title,
            kind: self.kind,
            category: self.category.filter(|c| !c.trim().is_empty()),
            description: self.description.filter(|d| !d.trim().is_empty()),
            date: self.date,
        })
    }
}
