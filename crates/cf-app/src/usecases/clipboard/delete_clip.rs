use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use cf_core::ids::ClipId;
use cf_core::ports::ClipboardBackendPort;

/// Use case for deleting a clip on the backend.
pub struct DeleteClip {
    backend: Arc<dyn ClipboardBackendPort>,
}

impl DeleteClip {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self { backend }
    }

    #[tracing::instrument(
        name = "usecase.delete_clip.execute",
        skip(self),
        fields(clip_id = %id)
    )]
    pub async fn execute(&self, id: &ClipId) -> Result<()> {
        info!(clip_id = %id, "Starting clip deletion");

        self.backend
            .delete(id)
            .await
            .with_context(|| format!("Failed to delete clip {}", id))?;

        info!(clip_id = %id, "Deleted clip successfully");
        Ok(())
    }
}
