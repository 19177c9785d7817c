use async_trait::async_trait;
use tokio::sync::RwLock;
use cf_core::ports::SettingsPort;
use cf_core::settings::Settings;

/// Settings store that lives for the process only.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    settings: RwLock<Settings>,
}

impl InMemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn load(&self) -> anyhow::Result<Settings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
