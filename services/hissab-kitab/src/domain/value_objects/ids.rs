//! 强类型 ID 定义
//!
//! 记录 ID 由各自存储的单调序号生成，从 1 开始

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize, Display, From,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        pub struct $name(pub u64);

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// 销售记录 ID
    SaleId
);

record_id!(
    /// 生产批次记录 ID
    ProductionId
);

record_id!(
    /// 收支流水 ID
    TransactionId
);
