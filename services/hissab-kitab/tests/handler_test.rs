//! 处理器集成测试

use std::sync::Arc;

use chrono::NaiveDate;
use hissab_adapter_storage::{InMemoryKeyValueStore, InMemoryRecordStore};
use hissab_domain_core::{Decimal, Money};
use hissab_errors::AppError;
use hissab_kitab::application::{ServiceHandler, SimulatedLatency};
use hissab_kitab::domain::{
    LotSize, ProductionStatus, SaleId, SaleStatus, TransactionKind, UserProfile, UserRole,
};
use hissab_kitab::infrastructure::persistence::{
    KeyValueProfileRepository, PROFILE_KEY, sample_production, sample_sales,
};
use hissab_ports::KeyValueStore;
use serde_json::json;

fn handler_with_store() -> (ServiceHandler, Arc<InMemoryKeyValueStore>) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let handler = ServiceHandler::new(
        Arc::new(InMemoryRecordStore::with_seed(sample_sales())),
        Arc::new(InMemoryRecordStore::with_seed(sample_production())),
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(KeyValueProfileRepository::new(store.clone())),
        SimulatedLatency::instant(),
    );
    (handler, store)
}

fn handler() -> ServiceHandler {
    handler_with_store().0
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn rupees(paise: i64) -> Money {
    Money::inr(Decimal::new(paise, 2))
}

#[tokio::test]
async fn test_acme_sale_gets_next_id_and_pending_status() {
    let handler = handler();
    let before = handler.sales().await.unwrap().len();

    let submitted = handler
        .record_sale(&json!({
            "partyName": "Acme",
            "totalBoxes": 10,
            "amount": 500,
            "date": "2025-05-20"
        }))
        .await
        .unwrap();
    let sale = submitted.value;

    assert_eq!(sale.id, SaleId(before as u64 + 1));
    assert_eq!(sale.status, SaleStatus::Pending);
    assert_eq!(sale.party_name, "Acme");
    assert_eq!(sale.total_boxes, 10);
    assert_eq!(sale.total_amount, rupees(50_000));
    assert_eq!(sale.date, date("2025-05-20"));

    let sales = handler.sales().await.unwrap();
    assert_eq!(sales.len(), before + 1);
    assert_eq!(sales.last(), Some(&sale));

    assert_eq!(submitted.notice.title, "Sale entry added");
    assert_eq!(
        submitted.notice.description,
        "Sale to Acme has been recorded successfully."
    );
}

#[tokio::test]
async fn test_invalid_sale_creates_no_record() {
    let handler = handler();

    let inputs = [
        json!({ "partyName": "", "totalBoxes": 10, "amount": 500, "date": "2025-05-20" }),
        json!({ "partyName": "Acme", "totalBoxes": 10, "amount": 0, "date": "2025-05-20" }),
        json!({ "partyName": "Acme", "totalBoxes": -3, "amount": 500, "date": "2025-05-20" }),
        json!({ "partyName": "Acme", "totalBoxes": 10, "amount": 500 }),
        json!({ "partyName": "Acme", "totalBoxes": 1e12, "amount": 500, "date": "2025-05-20" }),
        json!({ "partyName": "Acme", "totalBoxes": 10, "amount": 1e300, "date": "2025-05-20" }),
    ];

    for input in &inputs {
        let err = handler.record_sale(input).await.unwrap_err();
        assert!(err.is_validation(), "expected validation error for {input}");
    }

    assert_eq!(handler.sales().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_validation_error_becomes_destructive_notice() {
    let handler = handler();
    let err = handler
        .record_sale(&json!({
            "partyName": "A",
            "totalBoxes": 1,
            "amount": 1,
            "date": "2025-05-20"
        }))
        .await
        .unwrap_err();

    let notice = err.to_notice();
    assert!(notice.is_destructive());
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.description, "Party name must be at least 2 characters.");
}

#[tokio::test]
async fn test_search_sales() {
    let handler = handler();

    assert_eq!(handler.search_sales("").await.unwrap(), handler.sales().await.unwrap());
    assert!(handler.search_sales("no such party").await.unwrap().is_empty());

    let delivered = handler.search_sales("DELIVERED").await.unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].party_name, "Sharma Enterprises");

    let kumar = handler.search_sales("kumar").await.unwrap();
    assert_eq!(kumar.len(), 1);
}

#[tokio::test]
async fn test_sales_overview() {
    let handler = handler();
    let overview = handler.sales_overview(date("2025-05-17")).await.unwrap();

    assert_eq!(overview.todays_sales, rupees(750_000));
    assert_eq!(overview.total_parties, 3);
    assert_eq!(overview.boxes_sold, 70);
}

#[tokio::test]
async fn test_production_is_always_pending() {
    let handler = handler();

    let submitted = handler
        .record_production(&json!({
            "date": "2025-05-20",
            "lotNo": "L-1236",
            "size": "XXL",
            "cuttingMaster": "Rajan Singh",
            "silaiKariger": "Mohan Kumar",
            "maalAaya": true,
            "status": "Completed"
        }))
        .await
        .unwrap();
    let record = submitted.value;

    assert_eq!(record.id.0, 4);
    assert_eq!(record.size, LotSize::DoubleExtraLarge);
    assert_eq!(record.status, ProductionStatus::Pending);
    assert!(record.maal_aaya);
    assert_eq!(
        submitted.notice.description,
        "Production entry for Lot L-1236 has been recorded successfully."
    );

    let overview = handler.production_overview().await.unwrap();
    assert_eq!(overview.pending, 2);
    assert_eq!(overview.total(), 4);
}

#[tokio::test]
async fn test_search_production() {
    let handler = handler();

    assert_eq!(handler.search_production("").await.unwrap().len(), 3);
    assert_eq!(handler.search_production("l-1235").await.unwrap().len(), 1);
    assert_eq!(handler.search_production("in progress").await.unwrap().len(), 1);
    assert!(handler.search_production("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transactions() {
    let handler = handler();
    assert!(handler.transactions().await.unwrap().is_empty());

    let submitted = handler
        .record_transaction(&json!({
            "title": "Thread purchase",
            "amount": 1250.5,
            "type": "expense",
            "category": "Materials",
            "date": "2025-05-18"
        }))
        .await
        .unwrap();
    assert_eq!(submitted.notice.description, "Transaction added successfully!");
    let first = submitted.value;
    assert_eq!(first.id.0, 1);
    assert_eq!(first.kind, TransactionKind::Expense);
    assert_eq!(first.amount, rupees(125_050));

    let err = handler.record_transaction(&json!({ "title": "" })).await.unwrap_err();
    assert!(err.is_validation());

    assert_eq!(handler.search_transactions("materials").await.unwrap().len(), 1);
    assert_eq!(handler.transactions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_amounts_keep_submitted_decimals() {
    let handler = handler();

    let sale = handler
        .record_sale(&json!({
            "partyName": "Acme",
            "totalBoxes": 1,
            "amount": "10.555",
            "date": "2025-05-20"
        }))
        .await
        .unwrap()
        .value;
    assert_eq!(sale.total_amount.amount, Decimal::new(10_555, 3));

    let largest = handler
        .record_sale(&json!({
            "partyName": "Acme",
            "totalBoxes": 1_000_000,
            "amount": 1_000_000_000_000u64,
            "date": "2025-05-20"
        }))
        .await
        .unwrap()
        .value;
    assert_eq!(largest.total_amount, Money::inr(Decimal::from(1_000_000_000_000u64)));

    let overview = handler.sales_overview(date("2025-05-20")).await.unwrap();
    assert_eq!(
        overview.todays_sales.amount,
        Decimal::from(1_000_000_000_000u64) + Decimal::new(10_555, 3)
    );
}

#[tokio::test]
async fn test_out_of_range_amounts_are_field_errors() {
    let handler = handler();

    let err = handler
        .record_sale(&json!({
            "partyName": "Acme",
            "totalBoxes": 5_000_000_000u64,
            "amount": 1e20,
            "date": "2025-05-20"
        }))
        .await
        .unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("totalBoxes"), Some("Number of boxes is too large."));
    assert_eq!(errors.get("amount"), Some("Amount is too large."));
    assert!(!errors.contains("form"));

    let err = handler
        .record_transaction(&json!({
            "title": "Loan",
            "amount": 1e16,
            "date": "2025-05-18"
        }))
        .await
        .unwrap_err();
    assert_eq!(err.to_notice().description, "Amount is too large.");

    assert_eq!(handler.sales().await.unwrap().len(), 3);
    assert!(handler.transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_default_profile_when_nothing_stored() {
    let handler = handler();
    let profile = handler.load_profile().await.unwrap();

    assert_eq!(profile, UserProfile::default());
    assert_eq!(profile.role, UserRole::Worker);
    assert!(profile.name.is_empty());
    assert!(profile.email.is_empty());
}

#[tokio::test]
async fn test_save_profile_then_load() {
    let (handler, store) = handler_with_store();
    store
        .set(PROFILE_KEY, r#"{"name":"Old","profileImage":"avatar.png"}"#)
        .await
        .unwrap();

    let submitted = handler
        .save_profile(&json!({
            "name": "Ravi Kumar",
            "email": "ravi@example.com",
            "phone": "9876543210",
            "address": "12 Market Road, Surat",
            "role": "Owner"
        }))
        .await
        .unwrap();
    assert_eq!(submitted.notice.title, "Profile updated");
    let saved = submitted.value;

    assert_eq!(saved.profile_image, "avatar.png");
    assert_eq!(saved.instagram.as_deref(), Some(""));
    assert_eq!(handler.load_profile().await.unwrap(), saved);
}

#[tokio::test]
async fn test_invalid_profile_is_not_saved() {
    let (handler, store) = handler_with_store();

    let err = handler
        .save_profile(&json!({
            "name": "Ravi Kumar",
            "email": "ravi@",
            "phone": "9876543210",
            "address": "12 Market Road",
            "role": "Owner"
        }))
        .await
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
    assert!(store.get(PROFILE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_password_mismatch_is_rejected() {
    let handler = handler();

    let err = handler
        .change_password(&json!({
            "currentPassword": "oldsecret",
            "newPassword": "newsecret",
            "confirmPassword": "newsecreT"
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_notice().description, "Passwords don't match");

    let notice = handler
        .change_password(&json!({
            "currentPassword": "oldsecret",
            "newPassword": "newsecret",
            "confirmPassword": "newsecret"
        }))
        .await
        .unwrap();
    assert_eq!(notice.title, "Password updated");
}

#[tokio::test]
async fn test_sign_in_and_sign_up() {
    let handler = handler();

    let notice = handler
        .sign_in(&json!({ "email": "ravi@example.com", "password": "secret" }))
        .await
        .unwrap();
    assert_eq!(notice.description, "Login successful! (This is just a demo)");

    let err = handler.sign_in(&json!({ "email": "ravi@example.com" })).await.unwrap_err();
    assert_eq!(err.to_notice().description, "Please fill in all fields");

    let notice = handler
        .sign_up(&json!({
            "username": "ravi",
            "email": "ravi@example.com",
            "password": "secret",
            "address": "12 Market Road",
            "userType": "owner"
        }))
        .await
        .unwrap();
    assert_eq!(notice.description, "Account created successfully!");

    assert_eq!(handler.sign_out().title, "Logged out");
}
