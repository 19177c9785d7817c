//! Use case for loading clipboard history
//! 加载剪贴板历史的用例

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;
use cf_core::clipboard::ClipItem;
use cf_core::ports::ClipboardBackendPort;

/// Largest reload a single call may request.
pub const MAX_LOAD_LIMIT: usize = 1000;

/// Use case for a full reload of the clipboard history.
///
/// ## Behavior / 行为
/// - Validates the requested limit
/// - Asks the backend for the newest clips, newest first
///
/// ## 中文
/// 全量重新加载剪贴板历史，供启动、清除后和空查询时使用。
pub struct LoadClipboardHistory {
    backend: Arc<dyn ClipboardBackendPort>,
    max_limit: usize,
}

impl LoadClipboardHistory {
    pub fn from_arc(backend: Arc<dyn ClipboardBackendPort>) -> Self {
        Self {
            backend,
            max_limit: MAX_LOAD_LIMIT,
        }
    }

    /// Loads up to `limit` clips, front-to-back in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is 0, exceeds the configured maximum, or
    /// the backend call fails. The backend error stays reachable through
    /// `downcast_ref::<BackendError>()`.
    #[tracing::instrument(name = "usecase.load_clipboard_history.execute", skip(self))]
    pub async fn execute(&self, limit: usize) -> Result<Vec<ClipItem>> {
        if limit == 0 {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at least 1",
                limit
            ));
        }

        if limit > self.max_limit {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at most {}",
                limit,
                self.max_limit
            ));
        }

        let items = self
            .backend
            .load_all(limit)
            .await
            .context("Failed to load clipboard history")?;

        debug!(count = items.len(), "Loaded clipboard history");
        Ok(items)
    }
}
