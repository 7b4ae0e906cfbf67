//! 示例数据

use chrono::NaiveDate;
use hissab_domain_core::{Decimal, Money, Record};

use crate::domain::entities::{
    ProductionDraft, ProductionRecord, SaleDraft, SaleRecord, Transaction,
};
use crate::domain::enums::{LotSize, ProductionStatus, SaleStatus};
use crate::domain::value_objects::{ProductionId, SaleId};

/// 2025 年 5 月的某一天；非法日期在编译期报错
const fn may_2025(day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2025, 5, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const MAY_14: NaiveDate = may_2025(14);
const MAY_15: NaiveDate = may_2025(15);
const MAY_16: NaiveDate = may_2025(16);
const MAY_17: NaiveDate = may_2025(17);
const MAY_18: NaiveDate = may_2025(18);
const MAY_19: NaiveDate = may_2025(19);
const MAY_20: NaiveDate = may_2025(20);
const MAY_22: NaiveDate = may_2025(22);

fn rupees(amount: i64) -> Money {
    Money::inr(Decimal::from(amount))
}

/// 销售示例数据
pub fn sample_sales() -> Vec<SaleRecord> {
    vec![
        SaleRecord::from_draft(
            SaleId(1),
            SaleDraft::pending(MAY_15, "Sharma Enterprises", 25, rupees(12_500))
                .with_status(SaleStatus::Delivered),
        ),
        SaleRecord::from_draft(
            SaleId(2),
            SaleDraft::pending(MAY_17, "Kumar Trading Co.", 15, rupees(7_500)),
        ),
        SaleRecord::from_draft(
            SaleId(3),
            SaleDraft::pending(MAY_18, "Singh Distributors", 30, rupees(15_000))
                .with_status(SaleStatus::Processing),
        ),
    ]
}

/// 生产批次示例数据
pub fn sample_production() -> Vec<ProductionRecord> {
    vec![
        ProductionRecord::from_draft(
            ProductionId(1),
            ProductionDraft {
                date: MAY_15,
                lot_no: "L-1234".to_string(),
                size: LotSize::ExtraLarge,
                cutting_master: "Rajan Singh".to_string(),
                silai_kariger: "Mohan Kumar".to_string(),
                last_date: Some(MAY_20),
                maal_aaya: true,
                press_date: Some(MAY_18),
                press_kariger: Some("Suresh Yadav".to_string()),
                status: ProductionStatus::InProgress,
            },
        ),
        ProductionRecord::from_draft(
            ProductionId(2),
            ProductionDraft {
                date: MAY_16,
                lot_no: "L-1235".to_string(),
                size: LotSize::Medium,
                cutting_master: "Vikram Patel".to_string(),
                silai_kariger: "Rajesh Sharma".to_string(),
                last_date: Some(MAY_22),
                maal_aaya: false,
                press_date: None,
                press_kariger: None,
                status: ProductionStatus::Pending,
            },
        ),
        ProductionRecord::from_draft(
            ProductionId(3),
            ProductionDraft {
                date: MAY_14,
                lot_no: "L-1233".to_string(),
                size: LotSize::Large,
                cutting_master: "Ajay Verma".to_string(),
                silai_kariger: "Dinesh Kumar".to_string(),
                last_date: Some(MAY_19),
                maal_aaya: true,
                press_date: Some(MAY_17),
                press_kariger: Some("Rakesh Gupta".to_string()),
                status: ProductionStatus::Completed,
            },
        ),
    ]
}

/// 收支流水示例数据（空）
pub fn sample_transactions() -> Vec<Transaction> {
    Vec::new()
}
