use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::{NewscenterError, Result},
    gateway::RemoteCallGateway,
};

/// Backend-persisted configuration. Unset fields stay `None`; the backend
/// applies its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub api_key: Option<String>,
    pub ai_url: Option<String>,
    pub ai_model_name: Option<String>,
    pub whisper_url: Option<String>,
    pub whisper_model_name: Option<String>,
    pub proxy: Option<String>,
}

/// Mirror of the backend-persisted settings record.
///
/// `load` falls back to the last cached copy (initially the defaults) when
/// the backend cannot be reached; `save` is confirm-then-cache like the
/// library store.
pub struct SettingsStore {
    gateway: Arc<dyn RemoteCallGateway>,
    cached: Mutex<AppSettings>,
}

impl SettingsStore {
    pub fn new(gateway: Arc<dyn RemoteCallGateway>) -> Self {
        Self {
            gateway,
            cached: Mutex::new(AppSettings::default()),
        }
    }

    /// Last loaded (or saved) settings, no backend round trip.
    pub fn current(&self) -> AppSettings {
        self.cached.lock().unwrap().clone()
    }

    /// Fetch from the backend, caching on success. On failure the cached copy
    /// is returned so the surface always has something to show.
    pub async fn load(&self) -> AppSettings {
        match self.gateway.load_settings().await {
            Ok(settings) => {
                *self.cached.lock().unwrap() = settings.clone();
                settings
            }
            Err(e) => {
                warn!(reason = %e.message, "settings load failed, serving cached copy");
                self.current()
            }
        }
    }

    /// Persist through the backend; the cache only changes once it confirms.
    pub async fn save(&self, settings: AppSettings) -> Result<()> {
        self.gateway
            .save_settings(settings.clone())
            .await
            .map_err(|e| NewscenterError::SettingsSaveFailed { reason: e.message })?;

        *self.cached.lock().unwrap() = settings;
        Ok(())
    }
}
