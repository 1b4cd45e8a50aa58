// Per-key async mutual exclusion.
//
// Purpose
// - Serialize work for one user (session start/end) or one subscription
//   (reminder evaluation) while letting different keys proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct KeyedLocks {
    slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until the key is free and holds it until the guard drops.
    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        self.slot(key).await.lock_owned().await
    }

    /// Holds the key only if nobody else does right now.
    pub async fn try_lock(&self, key: &str) -> Option<OwnedMutexGuard<()>> {
        self.slot(key).await.try_lock_owned().ok()
    }

    async fn slot(&self, key: &str) -> Arc<Mutex<()>> {
        let mut slots = self.slots.lock().await;
        // Drop slots nobody holds so the map tracks in-flight keys only.
        slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        slots.entry(key.to_string()).or_default().clone()
    }
}
