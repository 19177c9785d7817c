use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use cf_core::ids::ClipId;
use cf_core::ports::ClipboardBackendPort;

/// Use case for restoring a history clip to the system clipboard.
/// 将历史记录中的条目恢复到系统剪贴板。
///
/// The backend promotes the clip to the top of its history and announces
/// that as an upsert event, so the feed is not touched here.
pub struct CopyClipToSystem {
    backend: Arc<dyn ClipboardBackendPort>,
}

impl CopyClipToSystem {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self { backend }
    }

    #[tracing::instrument(
        name = "usecase.copy_clip_to_system.execute",
        skip(self),
        fields(clip_id = %id)
    )]
    pub async fn execute(&self, id: &ClipId) -> Result<()> {
        self.backend
            .copy_to_system(id)
            .await
            .with_context(|| format!("Failed to copy clip {} to the system clipboard", id))?;

        info!(clip_id = %id, "Copied clip to system clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::ports::tests::mock_ports::MockBackend;
    use cf_core::ports::BackendError;

    #[tokio::test]
    async fn test_access_denied_is_propagated() {
        let mut backend = MockBackend::new();
        backend
            .expect_copy_to_system()
            .returning(|_| Err(BackendError::ClipboardAccessDenied("locked".into())));

        let use_case = CopyClipToSystem::from_arc(Arc::new(backend));
        let err = use_case.execute(&ClipId::from_str("c1")).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BackendError>(),
            Some(BackendError::ClipboardAccessDenied(_))
        ));
    }
}
