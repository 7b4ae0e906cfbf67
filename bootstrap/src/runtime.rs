//! 运行时初始化

use hissab_config::AppConfig;
use hissab_telemetry::{init_tracing, init_tracing_json};
use tracing::info;

/// 初始化运行时（日志）
pub fn init_runtime(config: &AppConfig) {
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}
