//! 字段类型与类型转换

use chrono::{DateTime, NaiveDate};
use serde_json::{Number, Value};

/// 日期字段的规范格式
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// 精确表示整数的上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 字符串，不做转换
    Text,
    /// 数字，接受数字字符串和布尔值
    Number,
    /// 布尔值
    Boolean,
    /// 日期（`YYYY-MM-DD` 或 RFC 3339 时间戳）
    Date,
}

impl FieldKind {
    /// 默认的类型错误消息
    pub(crate) fn type_message(&self) -> &'static str {
        match self {
            FieldKind::Text => "Expected text",
            FieldKind::Number => "Expected number",
            FieldKind::Boolean => "Expected boolean",
            FieldKind::Date => "Invalid date",
        }
    }
}

/// 转换结果
#[derive(Debug, PartialEq)]
pub(crate) enum Coerced {
    /// 值缺失（字段不存在、null，或日期为空串）
    Missing,
    /// 转换成功
    Value(Value),
    /// 类型不匹配
    Mismatch,
}

/// 按字段类型转换原始输入
pub(crate) fn coerce(kind: FieldKind, raw: Option<&Value>) -> Coerced {
    let raw = match raw {
        None | Some(Value::Null) => return Coerced::Missing,
        Some(raw) => raw,
    };

    match kind {
        FieldKind::Text => match raw {
            Value::String(_) => Coerced::Value(raw.clone()),
            _ => Coerced::Mismatch,
        },
        FieldKind::Number => match to_number(raw) {
            Some(n) => Coerced::Value(number_value(n)),
            None => Coerced::Mismatch,
        },
        FieldKind::Boolean => match raw {
            Value::Bool(_) => Coerced::Value(raw.clone()),
            _ => Coerced::Mismatch,
        },
        FieldKind::Date => match raw {
            Value::String(s) if s.trim().is_empty() => Coerced::Missing,
            Value::String(s) => match parse_date(s.trim()) {
                Some(date) => Coerced::Value(Value::String(date.format(DATE_FORMAT).to_string())),
                None => Coerced::Mismatch,
            },
            _ => Coerced::Mismatch,
        },
    }
}

/// 数字转换：空串视为 0，true/false 视为 1/0
fn to_number(raw: &Value) -> Option<f64> {
    let n = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };

    n.is_finite().then_some(n)
}

/// 整数值输出为 JSON 整数，便于反序列化为整型字段
pub(crate) fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
