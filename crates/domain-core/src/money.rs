//! 货币值对象

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use rust_decimal::Decimal;

/// 货币代码
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(pub String);

impl Currency {
    pub fn new(code: &str) -> Self {
        Self(code.to_uppercase())
    }

    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    pub fn is_inr(&self) -> bool {
        self.0 == "INR"
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::inr()
    }
}

/// 金额值对象
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// 金额（以主单位存储，如卢比；十进制精确值）
    pub amount: Decimal,
    /// 货币代码
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// 卢比金额
    pub fn inr(amount: Decimal) -> Self {
        Self::new(amount, Currency::inr())
    }

    /// 从十进制文本解析（`"10.555"`、`"1e-2"`），超出范围返回 None
    pub fn parse(text: &str, currency: Currency) -> Option<Self> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
            .map(|amount| Self::new(amount, currency))
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// 按币种求和，空序列得到零
    ///
    /// 其他币种的金额被跳过；结果在溢出时饱和
    pub fn total<'a, I>(currency: Currency, items: I) -> Self
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let amount = items
            .into_iter()
            .filter(|m| m.currency == currency)
            .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.amount));
        Self::new(amount, currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.abs().round_dp(2);
        let whole = rounded.trunc();
        let fraction = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or_default();
        let whole = whole.normalize().to_string();
        let sign = if self.amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        if self.currency.is_inr() {
            write!(f, "{sign}₹{}.{fraction:02}", group_indian(&whole))
        } else {
            write!(f, "{sign}{} {whole}.{fraction:02}", self.currency.0)
        }
    }
}

/// 印度计数法分组：最后三位一组，其余两位一组（1,25,000）
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
