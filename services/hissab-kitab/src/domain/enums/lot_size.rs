//! 批次尺码

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 批次尺码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LotSize {
    #[serde(rename = "XS")]
    #[display("XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    #[display("S")]
    Small,
    #[serde(rename = "M")]
    #[display("M")]
    Medium,
    #[serde(rename = "L")]
    #[display("L")]
    Large,
    #[serde(rename = "XL")]
    #[display("XL")]
    ExtraLarge,
    #[serde(rename = "XXL")]
    #[display("XXL")]
    DoubleExtraLarge,
    #[serde(rename = "XXXL")]
    #[display("XXXL")]
    TripleExtraLarge,
}

impl LotSize {
    /// 全部尺码，按从小到大排列
    pub const ALL: [LotSize; 7] = [
        LotSize::ExtraSmall,
        LotSize::Small,
        LotSize::Medium,
        LotSize::Large,
        LotSize::ExtraLarge,
        LotSize::DoubleExtraLarge,
        LotSize::TripleExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LotSize::ExtraSmall => "XS",
            LotSize::Small => "S",
            LotSize::Medium => "M",
            LotSize::Large => "L",
            LotSize::ExtraLarge => "XL",
            LotSize::DoubleExtraLarge => "XXL",
            LotSize::TripleExtraLarge => "XXXL",
        }
    }

    /// 表单下拉选项
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(LotSize::as_str)
    }
}
