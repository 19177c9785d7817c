use async_trait::async_trait;

use super::errors::BackendError;
use crate::clipboard::ClipItem;
use crate::ids::ClipId;

/// ClipboardBackendPort
///
/// The command side of the backend that owns capture, persistence and
/// search. The feed only mirrors what this port reports.
///
/// Conventions:
/// - lists are returned front-to-back in display order
/// - returned lists already respect the backend's own retention bound
/// - live changes arrive separately as events, not through this port
#[async_trait]
pub trait ClipboardBackendPort: Send + Sync {
    /// Full reload of the most recent `limit` clips, pinned ones included.
    async fn load_all(&self, limit: usize) -> Result<Vec<ClipItem>, BackendError>;

    /// Server-side search, used when local filtering is not enough.
    async fn search(&self, text: &str) -> Result<Vec<ClipItem>, BackendError>;

    /// Pins or unpins a clip. Pinning assigns the next pin rank.
    async fn set_pinned(&self, id: &ClipId, pinned: bool) -> Result<(), BackendError>;

    async fn delete(&self, id: &ClipId) -> Result<(), BackendError>;

    /// Puts the clip back on the system clipboard. The backend promotes it
    /// and announces the promotion as an upsert event.
    async fn copy_to_system(&self, id: &ClipId) -> Result<(), BackendError>;

    async fn clear_all(&self) -> Result<(), BackendError>;

    /// Removes every unpinned clip. The backend follows up with a
    /// history-cleared event.
    async fn clear_unpinned(&self) -> Result<(), BackendError>;
}
