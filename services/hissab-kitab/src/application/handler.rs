//! Business logic handler

use std::sync::Arc;

use chrono::NaiveDate;
use hissab_bootstrap::metrics::{record_appended, record_form_submission};
use hissab_common::Notice;
use hissab_errors::{AppResult, FieldErrors};
use hissab_ports::RecordStore;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::entities::{ProductionRecord, SaleRecord, Transaction, UserProfile};
use crate::domain::repositories::ProfileRepository;
use crate::domain::views::{ProductionOverview, SalesOverview};
use crate::forms::{
    LoginForm, PasswordChangeForm, ProductionForm, ProfileForm, SaleForm, SignUpForm,
    TransactionForm,
};

use super::latency::SimulatedLatency;
use super::notices;

/// 记录校验结果
fn accept<T>(form: &str, parsed: Result<T, FieldErrors>) -> AppResult<T> {
    match parsed {
        Ok(value) => {
            record_form_submission(form, true);
            Ok(value)
        }
        Err(errors) => {
            warn!(form, %errors, "Form rejected");
            record_form_submission(form, false);
            Err(errors.into())
        }
    }
}

/// 提交成功的结果：保存下来的值与给用户的提示
#[derive(Debug, Clone)]
pub struct Submitted<T> {
    pub value: T,
    pub notice: Notice,
}

impl<T> Submitted<T> {
    fn new(value: T, notice: Notice) -> Self {
        Self { value, notice }
    }
}

pub struct ServiceHandler {
    sales: Arc<dyn RecordStore<SaleRecord>>,
    production: Arc<dyn RecordStore<ProductionRecord>>,
    transactions: Arc<dyn RecordStore<Transaction>>,
    profiles: Arc<dyn ProfileRepository>,
    latency: SimulatedLatency,
}

impl ServiceHandler {
    pub fn new(
        sales: Arc<dyn RecordStore<SaleRecord>>,
        production: Arc<dyn RecordStore<ProductionRecord>>,
        transactions: Arc<dyn RecordStore<Transaction>>,
        profiles: Arc<dyn ProfileRepository>,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            sales,
            production,
            transactions,
            profiles,
            latency,
        }
    }

    // ========== 登录 / 注册 ==========

    /// 登录（演示，不做真实认证）
    pub async fn sign_in(&self, input: &Value) -> AppResult<Notice> {
        let form = accept("login", LoginForm::parse(input))?;
        SimulatedLatency::wait(self.latency.sign_in).await;

        info!(email = %form.email, "User signed in");
        Ok(notices::signed_in())
    }

    /// 注册（演示，不保存账号）
    pub async fn sign_up(&self, input: &Value) -> AppResult<Notice> {
        let form = accept("sign_up", SignUpForm::parse(input))?;
        SimulatedLatency::wait(self.latency.sign_up).await;

        info!(
            username = %form.username,
            user_type = %form.user_type,
            "Account created"
        );
        Ok(notices::signed_up())
    }

    pub fn sign_out(&self) -> Notice {
        info!("User signed out");
        notices::signed_out()
    }

    // ========== 用户资料 ==========

    pub async fn load_profile(&self) -> AppResult<UserProfile> {
        self.profiles.load().await
    }

    /// 保存资料，头像沿用已保存的值
    pub async fn save_profile(&self, input: &Value) -> AppResult<Submitted<UserProfile>> {
        let form = accept("profile", ProfileForm::parse(input))?;
        let current = self.profiles.load().await?;

        let profile = UserProfile {
            name: form.name,
            email: form.email,
            phone: form.phone,
            address: form.address,
            role: form.role,
            profile_image: current.profile_image,
            instagram: Some(form.instagram.unwrap_or_default()),
        };

        self.profiles.save(&profile).await?;
        info!(role = %profile.role, "Profile updated");
        Ok(Submitted::new(profile, notices::profile_updated()))
    }

    /// 修改密码（只校验，不保存）
    pub async fn change_password(&self, input: &Value) -> AppResult<Notice> {
        accept("password_change", PasswordChangeForm::parse(input))?;
        SimulatedLatency::wait(self.latency.password_change).await;

        info!("Password change accepted");
        Ok(notices::password_updated())
    }

    // ========== 销售 ==========

    /// 录入销售，状态为待处理
    pub async fn record_sale(&self, input: &Value) -> AppResult<Submitted<SaleRecord>> {
        let draft = accept("sale", SaleForm::parse(input).and_then(SaleForm::into_draft))?;
        let sale = self.sales.append(draft).await?;

        record_appended("sales");
        info!(
            sale_id = %sale.id,
            party = %sale.party_name,
            boxes = sale.total_boxes,
            amount = %sale.total_amount,
            "Sale recorded"
        );
        let notice = notices::sale_recorded(&sale);
        Ok(Submitted::new(sale, notice))
    }

    pub async fn sales(&self) -> AppResult<Vec<SaleRecord>> {
        self.sales.list().await
    }

    /// 按客户名和状态搜索
    pub async fn search_sales(&self, query: &str) -> AppResult<Vec<SaleRecord>> {
        self.sales.filter(query).await
    }

    pub async fn sales_overview(&self, today: NaiveDate) -> AppResult<SalesOverview> {
        let records = self.sales.list().await?;
        Ok(SalesOverview::from_records(&records, today))
    }

    // ========== 生产 ==========

    /// 录入生产批次，状态一律为待开工
    pub async fn record_production(
        &self,
        input: &Value,
    ) -> AppResult<Submitted<ProductionRecord>> {
        let form = accept("production", ProductionForm::parse(input))?;
        let record = self.production.append(form.into_draft()).await?;

        record_appended("production");
        info!(
            production_id = %record.id,
            lot_no = %record.lot_no,
            size = %record.size,
            "Production entry recorded"
        );
        let notice = notices::production_recorded(&record);
        Ok(Submitted::new(record, notice))
    }

    pub async fn production(&self) -> AppResult<Vec<ProductionRecord>> {
        self.production.list().await
    }

    /// 按批次号、尺码、裁剪师傅、缝制工和状态搜索
    pub async fn search_production(&self, query: &str) -> AppResult<Vec<ProductionRecord>> {
        self.production.filter(query).await
    }

    pub async fn production_overview(&self) -> AppResult<ProductionOverview> {
        let records = self.production.list().await?;
        Ok(ProductionOverview::from_records(&records))
    }

    // ========== 收支 ==========

    pub async fn record_transaction(&self, input: &Value) -> AppResult<Submitted<Transaction>> {
        let draft = accept(
            "transaction",
            TransactionForm::parse(input).and_then(TransactionForm::into_draft),
        )?;
        SimulatedLatency::wait(self.latency.transaction).await;
        let transaction = self.transactions.append(draft).await?;

        record_appended("transactions");
        info!(
            transaction_id = %transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "Transaction recorded"
        );
        Ok(Submitted::new(transaction, notices::transaction_recorded()))
    }

    pub async fn transactions(&self) -> AppResult<Vec<Transaction>> {
        self.transactions.list().await
    }

    pub async fn search_transactions(&self, query: &str) -> AppResult<Vec<Transaction>> {
        self.transactions.filter(query).await
    }
}
