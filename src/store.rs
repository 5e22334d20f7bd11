//! Persistence port for the alert rule list.
//!
//! The store holds the whole list as one document. `load` never fails from
//! the caller's point of view (missing or corrupt data reads as an empty
//! list) and `save` is a best-effort whole-list replace. Writers always
//! re-read before mutating, so readers may poll `load` instead of holding a
//! cached copy; `subscribe` additionally notifies in-process listeners after
//! every successful save.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};

use crate::models::AlertRule;

#[async_trait]
pub trait RuleStore: Send + Sync {
    async fn load(&self) -> Vec<AlertRule>;
    async fn save(&self, rules: &[AlertRule]);
    fn subscribe(&self) -> broadcast::Receiver<()>;
}

/// Rule list persisted as a JSON array on disk.
pub struct JsonFileStore {
    path: PathBuf,
    changes: broadcast::Sender<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            path: path.into(),
            changes,
        }
    }
}

#[async_trait]
impl RuleStore for JsonFileStore {
    async fn load(&self) -> Vec<AlertRule> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            // first run: nothing persisted yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<AlertRule>>(&bytes) {
            Ok(rules) => rules,
            Err(e) => {
                tracing::warn!("corrupt rule list in {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn save(&self, rules: &[AlertRule]) {
        let json = match serde_json::to_vec_pretty(rules) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("failed to serialize rule list: {}", e);
                return;
            }
        };

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                if let Err(e) = tokio::fs::create_dir_all(dir).await {
                    tracing::warn!("failed to create {}: {}", dir.display(), e);
                    return;
                }
            }
        }

        // temp file + rename so a crashed write never leaves a half-written list
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = tokio::fs::write(&tmp, &json).await {
            tracing::warn!("failed to write {}: {}", tmp.display(), e);
            return;
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            tracing::warn!("failed to replace {}: {}", self.path.display(), e);
            return;
        }

        let _ = self.changes.send(());
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }
}

/// Ephemeral store backed by a `RwLock`; same notification contract as the
/// file store. Tests use it in place of real persistence.
pub struct MemoryStore {
    rules: RwLock<Vec<AlertRule>>,
    changes: broadcast::Sender<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            rules: RwLock::new(Vec::new()),
            changes,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleStore for MemoryStore {
    async fn load(&self) -> Vec<AlertRule> {
        self.rules.read().await.clone()
    }

    async fn save(&self, rules: &[AlertRule]) {
        *self.rules.write().await = rules.to_vec();
        let _ = self.changes.send(());
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }
}
