//! 销售与生产概览

use std::collections::HashSet;

use chrono::NaiveDate;
use hissab_domain_core::Money;
use serde::Serialize;

use crate::domain::entities::{ProductionRecord, SaleRecord};
use crate::domain::enums::ProductionStatus;

/// 销售概览卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    /// 当天销售额
    pub todays_sales: Money,
    /// 不同客户数（不区分大小写）
    pub total_parties: usize,
    pub boxes_sold: u64,
}

impl SalesOverview {
    pub fn from_records(records: &[SaleRecord], today: NaiveDate) -> Self {
        let todays_sales = Money::total(
            Default::default(),
            records
                .iter()
                .filter(|sale| sale.date == today)
                .map(|sale| &sale.total_amount),
        );

        let total_parties = records
            .iter()
            .map(|sale| sale.party_name.trim().to_lowercase())
            .collect::<HashSet<_>>()
            .len();

        let boxes_sold = records.iter().map(|sale| u64::from(sale.total_boxes)).sum();

        Self {
            todays_sales,
            total_parties,
            boxes_sold,
        }
    }
}

/// 生产概览卡片
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOverview {
    pub in_progress: usize,
    pub pending: usize,
    pub completed: usize,
}

impl ProductionOverview {
    pub fn from_records(records: &[ProductionRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut overview, record| {
                match record.status {
                    ProductionStatus::InProgress => overview.in_progress += 1,
                    ProductionStatus::Pending => overview.pending += 1,
                    ProductionStatus::Completed => overview.completed += 1,
                }
                overview
            })
    }

    pub fn total(&self) -> usize {
        self.in_progress + self.pending + self.completed
    }
}
