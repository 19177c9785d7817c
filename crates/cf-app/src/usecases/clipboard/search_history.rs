use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;
use cf_core::clipboard::ClipItem;
use cf_core::ports::ClipboardBackendPort;

/// Use case for a server-side filtered reload.
/// 在后端按关键字搜索剪贴板历史。
pub struct SearchClipboardHistory {
    backend: Arc<dyn ClipboardBackendPort>,
}

impl SearchClipboardHistory {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self { backend }
    }

    /// Runs a backend search for `query`.
    ///
    /// Returns `Ok(None)` without calling the backend when the query is blank;
    /// callers fall back to a plain reload in that case.
    #[tracing::instrument(name = "usecase.search_clipboard_history.execute", skip(self))]
    pub async fn execute(&self, query: &str) -> Result<Option<Vec<ClipItem>>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let items = self
            .backend
            .search(query)
            .await
            .with_context(|| format!("Failed to search clipboard history for '{}'", query))?;

        debug!(count = items.len(), "Search returned clips");
        Ok(Some(items))
    }
}
