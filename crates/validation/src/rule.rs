//! 字段约束与跨字段约束

use serde_json::{Map, Value};

/// 字段约束
///
/// 约束只作用于匹配的值类型（文本约束不检查数字，反之亦然）
#[derive(Debug, Clone)]
pub enum Rule {
    /// 文本去空白后非空
    Required { message: String },
    /// 最少字符数
    MinLength { min: usize, message: String },
    /// 合法的邮箱地址
    Email { message: String },
    /// 大于零
    Positive { message: String },
    /// 整数
    Integer { message: String },
    /// 不超过上限
    Max { max: f64, message: String },
    /// 取值在候选项中（大小写不敏感），输出统一为候选项的写法
    OneOf { options: Vec<String>, message: String },
}

impl Rule {
    /// 检查值；通过时返回（可能被规范化的）值，失败时返回错误消息
    pub(crate) fn check(&self, value: Value) -> Result<Value, &str> {
        match (self, &value) {
            (Rule::Required { message }, Value::String(s)) => {
                if s.trim().is_empty() {
                    return Err(message.as_str());
                }
            }
            (Rule::MinLength { min, message }, Value::String(s)) => {
                if s.chars().count() < *min {
                    return Err(message.as_str());
                }
            }
            (Rule::Email { message }, Value::String(s)) => {
                if !email_address::EmailAddress::is_valid(s) {
                    return Err(message.as_str());
                }
            }
            (Rule::Positive { message }, Value::Number(n)) => {
                if n.as_f64().is_none_or(|n| n <= 0.0) {
                    return Err(message.as_str());
                }
            }
            (Rule::Integer { message }, Value::Number(n)) => {
                if !(n.is_i64() || n.is_u64()) {
                    return Err(message.as_str());
                }
            }
            (Rule::Max { max, message }, Value::Number(n)) => {
                if n.as_f64().is_none_or(|n| n > *max) {
                    return Err(message.as_str());
                }
            }
            (Rule::OneOf { options, message }, Value::String(s)) => {
                return options
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(s.trim()))
                    .map(|option| Value::String(option.clone()))
                    .ok_or(message.as_str());
            }
            _ => {}
        }
        Ok(value)
    }
}

/// 跨字段约束
///
/// 只在所有字段都通过校验后执行
#[derive(Debug, Clone)]
pub struct Refinement {
    kind: RefinementKind,
    path: String,
    message: String,
}

#[derive(Debug, Clone)]
enum RefinementKind {
    Equals { left: String, right: String },
}

impl Refinement {
    /// 两个字段的值必须相等（如密码确认），错误报告在 `path` 字段上
    pub fn equals(
        left: impl Into<String>,
        right: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: RefinementKind::Equals {
                left: left.into(),
                right: right.into(),
            },
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn holds(&self, values: &Map<String, Value>) -> bool {
        match &self.kind {
            RefinementKind::Equals { left, right } => values.get(left) == values.get(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::MinLength {
            min: 2,
            message: message("too short"),
        };
        assert!(rule.check(json!("A")).is_err());
        assert!(rule.check(json!("अब")).is_ok());
        assert!(rule.check(json!("Acme")).is_ok());
    }

    #[test]
    fn test_required_rejects_blank_text() {
        let rule = Rule::Required {
            message: message("Please fill in all fields"),
        };
        assert_eq!(rule.check(json!("   ")), Err("Please fill in all fields"));
        assert!(rule.check(json!("x")).is_ok());
    }

    #[test]
    fn test_positive() {
        let rule = Rule::Positive {
            message: message("Amount must be positive."),
        };
        assert!(rule.check(json!(0)).is_err());
        assert!(rule.check(json!(-5)).is_err());
        assert!(rule.check(json!(0.5)).is_ok());
    }

    #[test]
    fn test_integer() {
        let integer = Rule::Integer {
            message: message("whole"),
        };
        assert!(integer.check(json!(10)).is_ok());
        assert!(integer.check(json!(2.5)).is_err());
    }

    #[test]
    fn test_max_is_inclusive() {
        let rule = Rule::Max {
            max: 1_000.0,
            message: message("too large"),
        };
        assert!(rule.check(json!(1_000)).is_ok());
        assert!(rule.check(json!(999.99)).is_ok());
        assert_eq!(rule.check(json!(1_000.01)), Err("too large"));
        assert_eq!(rule.check(json!(1e300)), Err("too large"));
    }

    #[test]
    fn test_one_of_canonicalizes() {
        let rule = Rule::OneOf {
            options: vec![message("Worker"), message("Owner")],
            message: message("Role is required."),
        };
        assert_eq!(rule.check(json!("owner")), Ok(json!("Owner")));
        assert_eq!(rule.check(json!("Manager")), Err("Role is required."));
    }

    #[test]
    fn test_email() {
        let rule = Rule::Email {
            message: message("Please enter a valid email address."),
        };
        assert!(rule.check(json!("ravi@example.com")).is_ok());
        assert!(rule.check(json!("ravi.example.com")).is_err());
    }

    #[test]
    fn test_text_rules_ignore_numbers() {
        let rule = Rule::MinLength {
            min: 5,
            message: message("too short"),
        };
        assert_eq!(rule.check(json!(1)), Ok(json!(1)));
    }
}
