//! 应用启动器

use std::error::Error;
use std::future::Future;

use hissab_config::AppConfig;
use hissab_telemetry::init_metrics;
use tracing::{info, warn};

use crate::infrastructure::Infrastructure;
use crate::runtime::init_runtime;

/// 运行应用
///
/// 1. 加载配置
/// 2. 初始化日志
/// 3. 安装 metrics recorder
/// 4. 装配存储后端
/// 5. 调用闭包执行应用逻辑
///
/// # 示例
///
/// ```ignore
/// use hissab_bootstrap::run_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_app("config", |infra| async move {
///         let store = infra.key_value_store();
///         Ok(())
///     })
///     .await
/// }
/// ```
pub async fn run_app<F, Fut>(config_dir: &str, app: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = Result<(), Box<dyn Error>>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {}", config.app_name);

    let mut infra = Infrastructure::from_config(config);
    match init_metrics() {
        Ok(handle) => infra = infra.with_metrics(handle),
        Err(e) => warn!("Metrics recorder not installed: {}", e),
    }

    app(infra).await?;

    info!("Application stopped");

    Ok(())
}
