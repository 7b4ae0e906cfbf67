//! 内存存储实现

use std::collections::HashMap;

use async_trait::async_trait;
use hissab_common::{IdSequence, any_field_matches};
use hissab_domain_core::{Entity, Record};
use hissab_errors::{AppError, AppResult};
use hissab_ports::{KeyValueStore, RecordStore};
use tokio::sync::RwLock;
use tracing::debug;

/// 内存记录存储
///
/// 记录按插入顺序保存，ID 由存储独占的序号生成器分配。
/// 进程重启后状态丢失。
pub struct InMemoryRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
    sequence: IdSequence,
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            sequence: IdSequence::new(),
        }
    }

    /// 以示例数据初始化，新记录的 ID 从最大种子 ID 之后开始
    pub fn with_seed(records: Vec<R>) -> Self {
        let last = records
            .iter()
            .map(|record| Into::<u64>::into(*record.id()))
            .max()
            .unwrap_or(0);

        Self {
            records: RwLock::new(records),
            sequence: IdSequence::starting_after(last),
        }
    }
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn append(&self, draft: R::Draft) -> AppResult<R> {
        let mut records = self.records.write().await;

        let id = R::Id::from(self.sequence.next_id());
        if records.iter().any(|record| record.id() == &id) {
            return Err(AppError::conflict(format!("Record {} already exists", id)));
        }

        let record = R::from_draft(id, draft);
        records.push(record.clone());
        debug!(record_id = %id, total = records.len(), "Record appended");

        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<R>> {
        Ok(self.records.read().await.clone())
    }

    async fn filter(&self, query: &str) -> AppResult<Vec<R>> {
        let records = self.records.read().await;
        if query.is_empty() {
            return Ok(records.clone());
        }

        Ok(records
            .iter()
            .filter(|record| any_field_matches(record.search_fields(), query))
            .cloned()
            .collect())
    }
}

/// 内存键值存储
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
