/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - version: 起動時に解決した表示用バージョン
 * - Clone 前提で持つ (内部は Arc で cheap)
 */
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub version: Arc<str>,
}

impl AppState {
    pub fn new(version: impl Into<Arc<str>>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.version.as_str())
    }
}
