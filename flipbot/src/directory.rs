//! Shared, swappable user directory.
//!
//! Handlers take a [`snapshot`](DirectoryHandle::snapshot) per event; a roster refresh builds a
//! whole new [`UserDirectory`] and swaps the shared reference, so a flip in flight keeps the
//! snapshot it started with.

use std::sync::Arc;

use flip_markup::UserDirectory;
use flipbot_core::{ChatApi, Result};
use tokio::sync::RwLock;
use tracing::{info, instrument};

#[derive(Debug, Clone, Default)]
pub struct DirectoryHandle {
    current: Arc<RwLock<Arc<UserDirectory>>>,
}

impl DirectoryHandle {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(directory))),
        }
    }

    /// The directory as of now.
    pub async fn snapshot(&self) -> Arc<UserDirectory> {
        self.current.read().await.clone()
    }

    /// Replaces the directory for all later snapshots.
    pub async fn replace(&self, directory: UserDirectory) {
        *self.current.write().await = Arc::new(directory);
    }

    /// Rebuilds the directory from the workspace roster. Returns the number of users.
    #[instrument(skip(self, api))]
    pub async fn refresh(&self, api: &dyn ChatApi) -> Result<usize> {
        let members = api.list_members().await?;
        let directory: UserDirectory = members.into_iter().map(|m| (m.id, m.name)).collect();
        let count = directory.len();
        self.replace(directory).await;
        info!(users = count, "User directory refreshed");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_does_not_touch_old_snapshot() {
        let handle = DirectoryHandle::new([("U1", "ada")].into_iter().collect());
        let before = handle.snapshot().await;

        handle
            .replace([("U1", "grace"), ("U2", "alan")].into_iter().collect())
            .await;

        assert_eq!(before.display_name("U1"), Some("ada"));
        let after = handle.snapshot().await;
        assert_eq!(after.display_name("U1"), Some("grace"));
        assert_eq!(after.len(), 2);
    }

    #[tokio::test]
    async fn test_default_is_empty() {
        assert!(DirectoryHandle::default().snapshot().await.is_empty());
    }
}
