//! hissab-validation - 声明式表单校验
//!
//! 表单由一组字段规格（类型、是否必填、约束规则）和跨字段约束组成。
//! 校验是纯函数：输入一个未定型的 JSON 对象，输出规范化后的值对象，
//! 或字段名 -> 错误消息的映射。
//!
//! ```
//! use hissab_validation::{FieldSpec, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(FieldSpec::text("partyName").min_length(2, "Party name is too short."))
//!     .field(FieldSpec::number("totalBoxes").positive("Number of boxes must be positive."));
//!
//! let values = schema.validate(&json!({ "partyName": "Acme", "totalBoxes": "10" })).unwrap();
//! assert_eq!(values["totalBoxes"], json!(10));
//! ```

mod coerce;
mod rule;
mod schema;

pub use coerce::FieldKind;
pub use rule::{Refinement, Rule};
pub use schema::{FieldSpec, Schema};

/// 整张表单级别错误使用的字段名
pub const FORM_FIELD: &str = "form";
