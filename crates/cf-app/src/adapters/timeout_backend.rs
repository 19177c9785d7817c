use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use cf_core::clipboard::ClipItem;
use cf_core::ids::ClipId;
use cf_core::ports::{BackendError, ClipboardBackendPort};

/// Puts a per-call deadline on another backend.
///
/// A call that does not finish in time fails with `BackendError::Timeout`;
/// the inner future is dropped.
pub struct TimeoutBackend {
    inner: Arc<dyn ClipboardBackendPort>,
    timeout: Duration,
}

impl TimeoutBackend {
    pub fn new(inner: Arc<dyn ClipboardBackendPort>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn guarded<T>(
        &self,
        call: &'static str,
        fut: impl Future<Output = Result<T, BackendError>> + Send,
    ) -> Result<T, BackendError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    call,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Backend call timed out"
                );
                Err(BackendError::Timeout)
            }
        }
    }
}

#[async_trait]
impl ClipboardBackendPort for TimeoutBackend {
    async fn load_all(&self, limit: usize) -> Result<Vec<ClipItem>, BackendError> {
        self.guarded("load_all", self.inner.load_all(limit)).await
    }

    async fn search(&self, text: &str) -> Result<Vec<ClipItem>, BackendError> {
        self.guarded("search", self.inner.search(text)).await
    }

    async fn set_pinned(&self, id: &ClipId, pinned: bool) -> Result<(), BackendError> {
        self.guarded("set_pinned", self.inner.set_pinned(id, pinned))
            .await
    }

    async fn delete(&self, id: &ClipId) -> Result<(), BackendError> {
        self.guarded("delete", self.inner.delete(id)).await
    }

    async fn copy_to_system(&self, id: &ClipId) -> Result<(), BackendError> {
        self.guarded("copy_to_system", self.inner.copy_to_system(id))
            .await
    }

    async fn clear_all(&self) -> Result<(), BackendError> {
        self.guarded("clear_all", self.inner.clear_all()).await
    }

    async fn clear_unpinned(&self) -> Result<(), BackendError> {
        self.guarded("clear_unpinned", self.inner.clear_unpinned())
            .await
    }
}
