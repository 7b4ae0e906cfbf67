//! hissab-kitab - 记账后台
//!
//! 启动时装配存储与处理器，输出当前账本概览

use std::error::Error;
use std::sync::Arc;

use chrono::Local;
use hissab_adapter_storage::InMemoryRecordStore;
use hissab_bootstrap::{Infrastructure, run_app};
use tracing::info;

use hissab_kitab::application::{ServiceHandler, SimulatedLatency};
use hissab_kitab::infrastructure::persistence::{
    KeyValueProfileRepository, sample_production, sample_sales, sample_transactions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    run_app("config", |infra: Infrastructure| async move {
        info!("Initializing HissabKitab...");

        let config = infra.config();
        let (sales, production, transactions) = if config.storage.seed_sample_data {
            (
                InMemoryRecordStore::with_seed(sample_sales()),
                InMemoryRecordStore::with_seed(sample_production()),
                InMemoryRecordStore::with_seed(sample_transactions()),
            )
        } else {
            (
                InMemoryRecordStore::new(),
                InMemoryRecordStore::new(),
                InMemoryRecordStore::new(),
            )
        };
        let profiles = KeyValueProfileRepository::with_key(
            infra.key_value_store(),
            config.storage.profile_key.clone(),
        );
        info!("Stores initialized");

        let handler = ServiceHandler::new(
            Arc::new(sales),
            Arc::new(production),
            Arc::new(transactions),
            Arc::new(profiles),
            SimulatedLatency::from(&config.simulation),
        );

        let profile = handler.load_profile().await?;
        let sales_overview = handler.sales_overview(Local::now().date_naive()).await?;
        let production_overview = handler.production_overview().await?;

        info!(
            user = %profile.name,
            role = %profile.role,
            todays_sales = %sales_overview.todays_sales,
            total_parties = sales_overview.total_parties,
            boxes_sold = sales_overview.boxes_sold,
            lots_in_progress = production_overview.in_progress,
            lots_pending = production_overview.pending,
            lots_completed = production_overview.completed,
            "Ledger overview"
        );

        if let Some(snapshot) = infra.render_metrics() {
            info!(metrics = %snapshot, "Metrics snapshot");
        }

        Ok::<(), Box<dyn Error>>(())
    })
    .await
}
