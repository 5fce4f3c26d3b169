use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use linkcollector_core::{Config, Repository};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    cookie_key: Key,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>, cookie_key: Key) -> Self {
        Self { repo, cookie_key }
    }

    /// Build state with the configured session secret, or a random key
    pub fn from_config(config: &Config, repo: Arc<dyn Repository>) -> Result<Self> {
        let cookie_key = match &config.session_secret {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|e| anyhow!("Invalid session secret: {:?}", e))?,
            None => {
                tracing::warn!("session_secret not set, sessions will not survive a restart");
                Key::generate()
            }
        };
        Ok(Self::new(repo, cookie_key))
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkcollector_core::Store;

    #[test]
    fn test_from_config_with_secret() {
        let config = Config {
            session_secret: Some("k".repeat(64)),
            ..Config::default()
        };
        assert!(AppState::from_config(&config, Arc::new(Store::new())).is_ok());
    }

    #[test]
    fn test_from_config_without_secret() {
        let config = Config::default();
        assert!(AppState::from_config(&config, Arc::new(Store::new())).is_ok());
    }
}
