//! 基于键值存储的用户资料仓储

use std::sync::Arc;

use async_trait::async_trait;
use hissab_errors::AppResult;
use hissab_ports::KeyValueStore;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::entities::UserProfile;
use crate::domain::enums::UserRole;
use crate::domain::repositories::ProfileRepository;

/// 缺省存储键
pub const PROFILE_KEY: &str = "userProfile";

/// 存储中的资料
///
/// 每个字段单独回退到默认值，角色取值不识别时视为工人
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredProfile {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    role: Option<String>,
    profile_image: Option<String>,
    instagram: Option<String>,
}

impl From<StoredProfile> for UserProfile {
    fn from(stored: StoredProfile) -> Self {
        Self {
            name: stored.name.unwrap_or_default(),
            email: stored.email.unwrap_or_default(),
            phone: stored.phone.unwrap_or_default(),
            address: stored.address.unwrap_or_default(),
            role: stored
                .role
                .as_deref()
                .map(UserRole::from_lenient)
                .unwrap_or_default(),
            profile_image: stored.profile_image.unwrap_or_default(),
            instagram: stored.instagram,
        }
    }
}

/// 键值存储上的用户资料仓储
pub struct KeyValueProfileRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, PROFILE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    fn decode(&self, raw: &str) -> UserProfile {
        match serde_json::from_str::<StoredProfile>(raw) {
            Ok(stored) => stored.into(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored profile is malformed, using defaults");
                UserProfile::default()
            }
        }
    }
}

#[async_trait]
impl ProfileRepository for KeyValueProfileRepository {
    async fn load(&self) -> AppResult<UserProfile> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(self.decode(&raw)),
            None => {
                debug!(key = %self.key, "No stored profile, using defaults");
                Ok(UserProfile::default())
            }
        }
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(&self.key, &raw).await?;
        debug!(key = %self.key, "Profile saved");
        Ok(())
    }
}
