//! JSON 文件键值存储
//!
//! 所有键值保存在同一个 JSON 对象文件中，写入先写临时文件再原子替换

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use hissab_errors::{AppError, AppResult};
use hissab_ports::KeyValueStore;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

type Entries = BTreeMap<String, Value>;

/// 文件键值存储
///
/// 文件损坏时按空存储处理并记录警告，下一次写入会覆盖它
pub struct FileKeyValueStore {
    path: PathBuf,
    /// 串行化同一进程内的读-改-写
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// 创建存储（文件不存在时视为空存储，首次写入时创建）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "File key-value store opened");
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> AppResult<Entries> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Storage file is corrupted, treating it as empty"
                );
                Ok(Entries::new())
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    /// 字符串值原样返回；其他 JSON 值以其 JSON 文本返回
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_entries()
            .await?
            .remove(key)
            .map(|value| match value {
                Value::String(text) => text,
                other => other.to_string(),
            }))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hissab-kv-{}-{}", std::process::id(), name))
            .join("storage.json")
    }

    fn write_raw(path: &std::path::Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = FileKeyValueStore::new(temp_path("missing"));
        assert!(store.get("userProfile").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let store = FileKeyValueStore::new(&path);
        store.set("userProfile", "{\"name\":\"Ravi\"}").await.unwrap();
        store.set("theme", "dark").await.unwrap();
        drop(store);

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(
            reopened.get("userProfile").await.unwrap().as_deref(),
            Some("{\"name\":\"Ravi\"}")
        );
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_corrupted_file_reads_as_empty_and_is_overwritten() {
        let path = temp_path("corrupted");
        write_raw(&path, "not json");

        let store = FileKeyValueStore::new(&path);
        assert!(store.get("userProfile").await.unwrap().is_none());

        store.set("userProfile", "{\"name\":\"Ravi\"}").await.unwrap();
        assert_eq!(
            store.get("userProfile").await.unwrap().as_deref(),
            Some("{\"name\":\"Ravi\"}")
        );

        let on_disk: Entries =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 1);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_non_string_value_is_returned_as_json_text() {
        let path = temp_path("object-value");
        write_raw(&path, r#"{"userProfile": {"name": "x"}, "theme": "dark"}"#);

        let store = FileKeyValueStore::new(&path);
        assert_eq!(
            store.get("userProfile").await.unwrap().as_deref(),
            Some(r#"{"name":"x"}"#)
        );

        store.set("userProfile", "{}").await.unwrap();
        assert_eq!(store.get("userProfile").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
