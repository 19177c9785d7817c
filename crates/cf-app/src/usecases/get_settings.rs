//! Use case for getting user settings
//! 获取用户设置的用例

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use cf_core::ports::SettingsPort;
use cf_core::settings::Settings;

/// Use case for retrieving user settings.
///
/// ## Behavior / 行为
/// - Loads settings from the settings port
/// - Returns the complete settings structure
///
/// ## 中文
/// 从设置存储中读取当前用户设置并返回给调用方。
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(Settings)` - the stored settings
    /// - `Err(e)` if the store cannot be read
    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            info!(
                max_history_items = result.max_history_items,
                locale = %result.locale,
                "Settings retrieved"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::ports::tests::mock_ports::MockSettingsStore;

    #[tokio::test]
    async fn test_get_returns_stored_settings() {
        let stored = Settings {
            max_history_items: 30,
            locale: "en".to_string(),
            ..Settings::default()
        };
        let expected = stored.clone();

        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .times(1)
            .returning(move || Ok(stored.clone()));
        store.expect_save().never();

        let use_case = GetSettings::new(Arc::new(store));

        assert_eq!(use_case.execute().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_get_propagates_load_error() {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|| Err(anyhow::anyhow!("settings file is corrupt")));

        let use_case = GetSettings::new(Arc::new(store));

        let err = use_case.execute().await.unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }
}
