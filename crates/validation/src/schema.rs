//! 表单 schema

use hissab_errors::FieldErrors;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::FORM_FIELD;
use crate::coerce::{Coerced, FieldKind, coerce};
use crate::rule::{Refinement, Rule};

/// 缺省的必填错误消息
const DEFAULT_REQUIRED_MESSAGE: &str = "Required";

/// 字段规格
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    optional: bool,
    default: Option<Value>,
    required_message: String,
    type_message: Option<String>,
    rules: Vec<Rule>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            default: None,
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            type_message: None,
            rules: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// 缺失时输出 null
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// 缺失时使用默认值
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// 缺失时的错误消息
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// 类型不匹配时的错误消息
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }

    /// 必填且不能为空白，缺失和空白使用同一条消息
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.required_message(message.clone())
            .rule(Rule::Required { message })
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Email {
            message: message.into(),
        })
    }

    pub fn positive(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Positive {
            message: message.into(),
        })
    }

    pub fn integer(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Integer {
            message: message.into(),
        })
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.rule(Rule::Max {
            max,
            message: message.into(),
        })
    }

    pub fn one_of<I, S>(self, options: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(Rule::OneOf {
            options: options.into_iter().map(Into::into).collect(),
            message: message.into(),
        })
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 校验单个字段
    fn check(&self, raw: Option<&Value>) -> Result<Value, String> {
        let value = match coerce(self.kind, raw) {
            Coerced::Value(value) => value,
            Coerced::Missing => {
                if let Some(default) = &self.default {
                    return Ok(default.clone());
                }
                if self.optional {
                    return Ok(Value::Null);
                }
                return Err(self.required_message.clone());
            }
            Coerced::Mismatch => {
                return Err(self
                    .type_message
                    .clone()
                    .unwrap_or_else(|| self.kind.type_message().to_string()));
            }
        };

        self.rules
            .iter()
            .try_fold(value, |value, rule| rule.check(value).map_err(str::to_string))
    }
}

/// 表单 schema
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    refinements: Vec<Refinement>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// 校验并规范化输入
    ///
    /// 输出只包含 schema 中声明的字段；每个字段只报告第一条错误
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, FieldErrors> {
        let Some(object) = input.as_object() else {
            return Err(FieldErrors::single(FORM_FIELD, "Expected an object"));
        };

        let mut values = Map::new();
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            match field.check(object.get(field.name())) {
                Ok(value) => {
                    values.insert(field.name().to_string(), value);
                }
                Err(message) => errors.insert(field.name(), message),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        for refinement in &self.refinements {
            if !refinement.holds(&values) {
                errors.insert(refinement.path(), refinement.message());
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(errors)
        }
    }

    /// 校验后反序列化为具体的表单类型
    pub fn parse<T: DeserializeOwned>(&self, input: &Value) -> Result<T, FieldErrors> {
        let values = self.validate(input)?;
        serde_json::from_value(Value::Object(values))
            .map_err(|e| FieldErrors::single(FORM_FIELD, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn sale_schema() -> Schema {
        Schema::new()
            .field(
                FieldSpec::text("partyName")
                    .min_length(2, "Party name must be at least 2 characters."),
            )
            .field(
                FieldSpec::number("totalBoxes")
                    .positive("Number of boxes must be positive.")
                    .integer("Number of boxes must be a whole number.")
                    .max(1_000_000.0, "Number of boxes is too large."),
            )
            .field(FieldSpec::number("amount").positive("Amount must be positive."))
            .field(FieldSpec::date("date").required_message("A date is required."))
    }

    fn password_schema() -> Schema {
        Schema::new()
            .field(
                FieldSpec::text("newPassword")
                    .min_length(6, "Password must be at least 6 characters"),
            )
            .field(
                FieldSpec::text("confirmPassword").min_length(6, "Confirm password is required"),
            )
            .refine(Refinement::equals(
                "newPassword",
                "confirmPassword",
                "confirmPassword",
                "Passwords don't match",
            ))
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let values = sale_schema()
            .validate(&json!({
                "partyName": "Acme",
                "totalBoxes": "10",
                "amount": 500,
                "date": "2025-05-15",
                "unknown": "dropped"
            }))
            .unwrap();

        assert_eq!(values["partyName"], json!("Acme"));
        assert_eq!(values["totalBoxes"], json!(10));
        assert_eq!(values["amount"], json!(500));
        assert_eq!(values["date"], json!("2025-05-15"));
        assert!(!values.contains_key("unknown"));
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let errors = sale_schema()
            .validate(&json!({ "partyName": "A", "totalBoxes": 0, "amount": "-1" }))
            .unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("partyName"), Some("Party name must be at least 2 characters."));
        assert_eq!(errors.get("totalBoxes"), Some("Number of boxes must be positive."));
        assert_eq!(errors.get("amount"), Some("Amount must be positive."));
        assert_eq!(errors.get("date"), Some("A date is required."));
    }

    #[test]
    fn test_type_mismatch_message() {
        let errors = sale_schema()
            .validate(&json!({
                "partyName": "Acme",
                "totalBoxes": "ten",
                "amount": 1,
                "date": "2025-05-15"
            }))
            .unwrap_err();
        assert_eq!(errors.get("totalBoxes"), Some("Expected number"));
    }

    #[test]
    fn test_out_of_range_number_is_reported_on_field() {
        let errors = sale_schema()
            .validate(&json!({
                "partyName": "Acme",
                "totalBoxes": 1e12,
                "amount": 1,
                "date": "2025-05-15"
            }))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("totalBoxes"), Some("Number of boxes is too large."));
    }

    #[test]
    fn test_missing_text_uses_default_required_message() {
        let errors = sale_schema()
            .validate(&json!({ "totalBoxes": 1, "amount": 1, "date": "2025-05-15" }))
            .unwrap_err();
        assert_eq!(errors.get("partyName"), Some("Required"));
    }

    #[test]
    fn test_optional_and_default_fields() {
        let schema = Schema::new()
            .field(FieldSpec::text("instagram").optional())
            .field(FieldSpec::boolean("maalAaya").default_value(false))
            .field(FieldSpec::date("pressDate").optional());

        let values = schema.validate(&json!({ "pressDate": "" })).unwrap();
        assert_eq!(values["instagram"], Value::Null);
        assert_eq!(values["maalAaya"], json!(false));
        assert_eq!(values["pressDate"], Value::Null);
    }

    #[test]
    fn test_refinement_reports_on_path() {
        let errors = password_schema()
            .validate(&json!({ "newPassword": "secret1", "confirmPassword": "secret2" }))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));

        assert!(
            password_schema()
                .validate(&json!({ "newPassword": "secret1", "confirmPassword": "secret1" }))
                .is_ok()
        );
    }

    #[test]
    fn test_refinement_skipped_when_fields_fail() {
        let errors = password_schema()
            .validate(&json!({ "newPassword": "abc", "confirmPassword": "secret2" }))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("newPassword"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_non_object_input() {
        let errors = sale_schema().validate(&json!("Acme")).unwrap_err();
        assert_eq!(errors.get(FORM_FIELD), Some("Expected an object"));
    }

    #[test]
    fn test_parse_into_typed_form() {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct SaleForm {
            party_name: String,
            total_boxes: u32,
            amount: f64,
            date: chrono::NaiveDate,
        }

        let form: SaleForm = sale_schema()
            .parse(&json!({
                "partyName": "Acme",
                "totalBoxes": 10,
                "amount": "499.5",
                "date": "2025-05-18"
            }))
            .unwrap();

        assert_eq!(form.party_name, "Acme");
        assert_eq!(form.total_boxes, 10);
        assert_eq!(form.amount, 499.5);
        assert_eq!(form.date, chrono::NaiveDate::from_ymd_opt(2025, 5, 18).unwrap());
    }
}
