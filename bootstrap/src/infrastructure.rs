//! 基础设施资源
//!
//! 根据配置选择键值存储后端，并持有 metrics 句柄

use std::sync::Arc;

use hissab_adapter_storage::{FileKeyValueStore, InMemoryKeyValueStore};
use hissab_config::{AppConfig, StorageBackend};
use hissab_ports::KeyValueStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

/// 基础设施资源容器
pub struct Infrastructure {
    config: AppConfig,
    key_value_store: Arc<dyn KeyValueStore>,
    metrics: Option<PrometheusHandle>,
}

impl Infrastructure {
    /// 从配置创建基础设施
    pub fn from_config(config: AppConfig) -> Self {
        let key_value_store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => {
                let path = config.storage.file_path();
                info!(path = %path.display(), "Using file storage backend");
                Arc::new(FileKeyValueStore::new(path))
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage backend");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        Self {
            config,
            key_value_store,
            metrics: None,
        }
    }

    /// 挂载 Prometheus 句柄
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn key_value_store(&self) -> Arc<dyn KeyValueStore> {
        self.key_value_store.clone()
    }

    /// 当前指标快照（Prometheus 文本格式）
    pub fn render_metrics(&self) -> Option<String> {
        self.metrics.as_ref().map(PrometheusHandle::render)
    }
}
