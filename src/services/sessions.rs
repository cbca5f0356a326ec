use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::ProfileDraft;

/// Shared handle to one session's draft; the mutex keeps a single writer
pub type DraftHandle = Arc<Mutex<ProfileDraft>>;

/// Signup sessions keyed by id
///
/// Drafts live in memory only. A session that is not touched for the idle
/// timeout is dropped, and so is the least recently used one once the
/// registry is full.
///
/// The `max_sessions` cap is enforced eventually, when the cache runs its
/// housekeeping, not on every insert; the live count can briefly exceed it.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, DraftHandle>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_timeout_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_timeout_secs))
            .build();

        Self { sessions }
    }

    /// Start a session with an empty draft
    pub async fn create(&self) -> (Uuid, DraftHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(ProfileDraft::new()));
        self.sessions.insert(id, handle.clone()).await;

        tracing::debug!("Created signup session {}", id);
        (id, handle)
    }

    pub async fn get(&self, id: &Uuid) -> Option<DraftHandle> {
        let handle = self.sessions.get(id).await;
        if handle.is_none() {
            tracing::trace!("Session miss: {}", id);
        }
        handle
    }

    /// End a session, returning whether it existed
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).await.is_some();
        if removed {
            tracing::debug!("Discarded signup session {}", id);
        }
        removed
    }

    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply pending evictions now instead of on the next housekeeping pass
    #[cfg(test)]
    async fn flush(&self) {
        self.sessions.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interest;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SessionStore::new(10, 60);
        let (id, handle) = store.create().await;

        handle.lock().await.set_name("Om");

        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.lock().await.name(), "Om");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new(10, 60);
        let (first, _) = store.create().await;
        let (second, _) = store.create().await;
        assert_ne!(first, second);

        store
            .get(&first)
            .await
            .unwrap()
            .lock()
            .await
            .toggle_interest(Interest::Java);

        let other = store.get(&second).await.unwrap();
        assert!(other.lock().await.interests().is_empty());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new(10, 60);
        let (id, _) = store.create().await;

        assert!(store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
        assert!(!store.remove(&id).await);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let store = SessionStore::new(2, 600);
        let mut ids = Vec::new();
        for _ in 0..5 {
            let (id, _) = store.create().await;
            ids.push(id);
        }

        store.flush().await;

        assert!(store.len() <= 2, "live sessions: {}", store.len());
        let mut live = 0;
        for id in &ids {
            if store.get(id).await.is_some() {
                live += 1;
            }
        }
        assert!(live <= 2, "reachable sessions: {}", live);
    }

    #[tokio::test]
    async fn test_idle_session_expires() {
        let store = SessionStore::new(10, 1);
        let (id, _) = store.create().await;

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(store.get(&id).await.is_none());
    }
}
