use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use cf_core::ports::ClipboardBackendPort;

/// Which part of the history a clear removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    All,
    /// Keep pinned clips.
    Unpinned,
}

/// Use case for clearing clipboard history on the backend.
///
/// ## Behavior / 行为
/// - `ClearScope::All` removes every clip, pinned ones included
/// - `ClearScope::Unpinned` keeps pinned clips
pub struct ClearHistory {
    backend: Arc<dyn ClipboardBackendPort>,
}

impl ClearHistory {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self { backend }
    }

    #[tracing::instrument(name = "usecase.clear_history.execute", skip(self))]
    pub async fn execute(&self, scope: ClearScope) -> Result<()> {
        info!(?scope, "Clearing clipboard history (user requested)");

        let result = match scope {
            ClearScope::All => self.backend.clear_all().await,
            ClearScope::Unpinned => self.backend.clear_unpinned().await,
        };
        result.context("Failed to clear clipboard history")?;

        Ok(())
    }
}
