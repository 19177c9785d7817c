//! Use case for updating user settings
//! 更新用户设置的用例

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use cf_core::ports::SettingsPort;
use cf_core::settings::Settings;

/// Use case for updating user settings.
///
/// ## Behavior / 行为
/// - Validates the new settings
/// - Loads current settings for comparison
/// - Logs the names of changed fields
/// - Persists settings through the settings port
///
/// ## 中文
/// 校验并保存新设置。`maxHistoryItems` 为 0 时拒绝保存，存储保持不变。
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Validates and saves `settings`.
    ///
    /// # Returns / 返回值
    /// - `Ok(fields)` - camelCase names of the fields that changed
    /// - `Err(e)` if validation, loading or saving fails
    pub async fn execute(&self, settings: Settings) -> Result<Vec<&'static str>> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            if settings.max_history_items == 0 {
                return Err(anyhow::anyhow!(
                    "Invalid maxHistoryItems: {}. Must be at least 1",
                    settings.max_history_items
                ));
            }

            let old_settings = self.settings.load().await?;
            let changes = changed_fields(&old_settings, &settings);

            if changes.is_empty() {
                info!("Updating settings (no changes detected)");
            } else {
                info!(changed_fields = %changes.join(", "), "Updating settings");
            }

            self.settings.save(&settings).await?;

            info!("Settings updated successfully");
            Ok(changes)
        }
        .instrument(span)
        .await
    }
}

fn changed_fields(old: &Settings, new: &Settings) -> Vec<&'static str> {
    let mut changes = Vec::new();
    if old.global_shortcut != new.global_shortcut {
        changes.push("globalShortcut");
    }
    if old.max_history_items != new.max_history_items {
        changes.push("maxHistoryItems");
    }
    if old.auto_cleanup != new.auto_cleanup {
        changes.push("autoCleanup");
    }
    if old.tray_text_length != new.tray_text_length {
        changes.push("trayTextLength");
    }
    if old.store_original_image != new.store_original_image {
        changes.push("storeOriginalImage");
    }
    if old.max_pinned_in_tray != new.max_pinned_in_tray {
        changes.push("maxPinnedInTray");
    }
    if old.max_recent_in_tray != new.max_recent_in_tray {
        changes.push("maxRecentInTray");
    }
    if old.custom_data_path != new.custom_data_path {
        changes.push("customDataPath");
    }
    if old.enable_autostart != new.enable_autostart {
        changes.push("enableAutostart");
    }
    if old.locale != new.locale {
        changes.push("locale");
    }
    changes
}
