use std::sync::Arc;

use crate::domain::settings_model::SystemSettings;
use crate::infrastructure::store::{load_or, save, KeyValueStore, RepoError};

const KEY_SYSTEM_SETTINGS: &str = "systemSettings";

pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 設定を読み込む。未保存なら既定値を返す
    pub fn get(&self) -> Result<SystemSettings, RepoError> {
        Ok(load_or(
            self.store.as_ref(),
            KEY_SYSTEM_SETTINGS,
            SystemSettings::default,
        )?)
    }

    pub fn update(&self, settings: &SystemSettings) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_SYSTEM_SETTINGS, settings)?)
    }

    /// 設定を既定値に戻して保存する
    pub fn reset(&self) -> Result<SystemSettings, RepoError> {
        let defaults = SystemSettings::default();
        self.update(&defaults)?;
        Ok(defaults)
    }
}
