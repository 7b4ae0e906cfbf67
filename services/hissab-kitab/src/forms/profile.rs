//! 资料编辑与修改密码表单

use hissab_errors::FieldErrors;
use hissab_validation::{FieldSpec, Refinement, Schema};
use once_cell::sync::Lazy;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::enums::UserRole;

const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
const PHONE_MESSAGE: &str = "Please enter a valid phone number.";
const ADDRESS_MESSAGE: &str = "Address must be at least 5 characters.";
const ROLE_MESSAGE: &str = "Role is required.";

const CURRENT_PASSWORD_MESSAGE: &str = "Current password is required (min 6 characters)";
const NEW_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters";
const CONFIRM_PASSWORD_MESSAGE: &str = "Confirm password is required";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords don't match";

pub static PROFILE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldSpec::text("name")
                .required_message(NAME_MESSAGE)
                .min_length(2, NAME_MESSAGE),
        )
        .field(
            FieldSpec::text("email")
                .required_message(EMAIL_MESSAGE)
                .email(EMAIL_MESSAGE),
        )
        .field(
            FieldSpec::text("phone")
                .required_message(PHONE_MESSAGE)
                .min_length(10, PHONE_MESSAGE),
        )
        .field(
            FieldSpec::text("address")
                .required_message(ADDRESS_MESSAGE)
                .min_length(5, ADDRESS_MESSAGE),
        )
        .field(
            FieldSpec::text("role")
                .required_message(ROLE_MESSAGE)
                .one_of(["Worker", "Owner"], ROLE_MESSAGE),
        )
        .field(FieldSpec::text("instagram").optional())
});

pub static PASSWORD_CHANGE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldSpec::text("currentPassword")
                .required_message(CURRENT_PASSWORD_MESSAGE)
                .min_length(6, CURRENT_PASSWORD_MESSAGE),
        )
        .field(
            FieldSpec::text("newPassword")
                .required_message(NEW_PASSWORD_MESSAGE)
                .min_length(6, NEW_PASSWORD_MESSAGE),
        )
        .field(
            FieldSpec::text("confirmPassword")
                .required_message(CONFIRM_PASSWORD_MESSAGE)
                .min_length(6, CONFIRM_PASSWORD_MESSAGE),
        )
        .refine(Refinement::equals(
            "newPassword",
            "confirmPassword",
            "confirmPassword",
            PASSWORD_MISMATCH_MESSAGE,
        ))
});

/// 资料编辑表单
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
    pub instagram: Option<String>,
}

impl ProfileForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        PROFILE_SCHEMA.parse(input)
    }
}

/// 修改密码表单
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeForm {
    pub current_password: Secret<String>,
    pub new_password: Secret<String>,
    pub confirm_password: Secret<String>,
}

impl PasswordChangeForm {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        PASSWORD_CHANGE_SCHEMA.parse(input)
    }
}
