//! 登录与注册表单

use hissab_errors::FieldErrors;
use hissab_validation::{FieldSpec, Schema};
use once_cell::sync::Lazy;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::enums::UserRole;

const FILL_ALL_FIELDS: &str = "Please fill in all fields";
const FILL_REQUIRED_FIELDS: &str = "Please fill in all required fields";

pub static LOGIN_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(FieldSpec::text("email").required(FILL_ALL_FIELDS))
        .field(FieldSpec::text("password").required(FILL_ALL_FIELDS))
});

pub static SIGN_UP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(FieldSpec::text("username").required(FILL_REQUIRED_FIELDS))
        .field(FieldSpec::text("email").required(FILL_REQUIRED_FIELDS))
        .field(FieldSpec::text("password").required(FILL_REQUIRED_FIELDS))
        .field(FieldSpec::text("address").required(FILL_REQUIRED_FIELDS))
        .field(
            FieldSpec::text("userType")
                .default_value("worker")
                .one_of(["worker", "owner"], "Please select a user type"),
        )
});

/// 登录表单
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Secret<String>,
}

impl LoginForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        LOGIN_SCHEMA.parse(input)
    }
}

/// 注册表单
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
    pub address: String,
    pub user_type: UserRole,
}

impl SignUpForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        SIGN_UP_SCHEMA.parse(input)
    }
}
