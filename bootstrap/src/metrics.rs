//! Metrics 模块
//!
//! 表单提交与记录追加计数

use ::metrics::counter;

/// 记录表单提交
pub fn record_form_submission(form: &str, accepted: bool) {
    let labels = [
        ("form", form.to_string()),
        ("accepted", accepted.to_string()),
    ];

    counter!("form_submissions_total", &labels).increment(1);
}

/// 记录新追加的记录
pub fn record_appended(ledger: &str) {
    let labels = [("ledger", ledger.to_string())];
    counter!("records_appended_total", &labels).increment(1);
}
