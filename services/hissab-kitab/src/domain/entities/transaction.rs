//! 收支流水实体

use chrono::NaiveDate;
use hissab_domain_core::{Entity, Money, Record};
use serde::{Deserialize, Serialize};

use crate::domain::enums::TransactionKind;
use crate::domain::value_objects::TransactionId;

/// 收支流水
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub title: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// 待入库的收支流水
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for Transaction {
    type Draft = TransactionDraft;

    fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.kind.as_str()];
        fields.extend(self.category.as_deref());
        fields.extend(self.description.as_deref());
        fields
    }
}
