use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use cf_core::ids::ClipId;
use cf_core::ports::ClipboardBackendPort;

/// Use case for pinning or unpinning a clip on the backend.
pub struct ToggleClipPin {
    backend: Arc<dyn ClipboardBackendPort>,
}

impl ToggleClipPin {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self { backend }
    }

    #[tracing::instrument(
        name = "usecase.toggle_clip_pin.execute",
        skip(self),
        fields(clip_id = %id)
    )]
    pub async fn execute(&self, id: &ClipId, pinned: bool) -> Result<()> {
        self.backend
            .set_pinned(id, pinned)
            .await
            .with_context(|| format!("Failed to set pinned={} for clip {}", pinned, id))?;

        info!(clip_id = %id, pinned, "Updated clip pin");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::ports::tests::mock_ports::MockBackend;
    use cf_core::ports::BackendError;

    #[tokio::test]
    async fn test_execute_forwards_flag() {
        let mut backend = MockBackend::new();
        backend
            .expect_set_pinned()
            .withf(|id, pinned| id == "c1" && *pinned)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = ToggleClipPin::from_arc(Arc::new(backend));

        assert!(use_case.execute(&ClipId::from_str("c1"), true).await.is_ok());
    }

    #[tokio::test]
    async fn test_not_found_is_propagated() {
        let mut backend = MockBackend::new();
        backend
            .expect_set_pinned()
            .returning(|id, _| Err(BackendError::NotFound(id.clone())));

        let use_case = ToggleClipPin::from_arc(Arc::new(backend));
        let err = use_case
            .execute(&ClipId::from_str("gone"), false)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BackendError>(),
            Some(BackendError::NotFound(_))
        ));
    }
}
