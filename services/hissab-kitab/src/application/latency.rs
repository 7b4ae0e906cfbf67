//! 模拟提交延迟

use std::time::Duration;

use hissab_config::SimulationConfig;

/// 模拟提交延迟
///
/// 延迟不可取消，结束后提交一定成功
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLatency {
    pub sign_in: Duration,
    pub sign_up: Duration,
    pub transaction: Duration,
    pub password_change: Duration,
}

impl SimulatedLatency {
    /// 无延迟
    pub fn instant() -> Self {
        Self::default()
    }

    pub(crate) async fn wait(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

impl From<&SimulationConfig> for SimulatedLatency {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            sign_in: config.sign_in_delay(),
            sign_up: config.sign_up_delay(),
            transaction: config.transaction_delay(),
            password_change: config.password_change_delay(),
        }
    }
}
