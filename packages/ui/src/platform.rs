//! Platform plumbing shared by every view.
//!
//! - **Session storage**: `localStorage` on the web (WASM + `web` feature),
//!   a JSON file under the platform data dir on desktop, memory otherwise.
//! - **Configuration**: `chattrix.toml` from the platform config dir, then
//!   `CHATTRIX_API_URL` / `CHATTRIX_MEDIA_URL` from the environment (a `.env`
//!   file is honored). The web build always uses the defaults.
//! - **Timers**: `sleep` backed by `gloo-timers` in the browser and tokio
//!   elsewhere.

use std::time::Duration;

use store::ClientConfig;

/// Platform-appropriate session store.
pub fn session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("chattrix");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Load the client configuration for this platform.
pub fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut config = read_config_file().unwrap_or_default();
        dotenvy::dotenv().ok();
        apply_env(
            &mut config,
            std::env::var("CHATTRIX_API_URL").ok(),
            std::env::var("CHATTRIX_MEDIA_URL").ok(),
        );
        config
    }
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ClientConfig> {
    let path = dirs::config_dir()?.join("chattrix").join(ClientConfig::filename());
    let text = std::fs::read_to_string(&path).ok()?;
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            None
        }
    }
}

fn apply_env(config: &mut ClientConfig, api_url: Option<String>, media_url: Option<String>) {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url;
    }
    if let Some(url) = media_url.filter(|u| !u.trim().is_empty()) {
        config.api.media_base_url = Some(url);
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config() {
        let mut config = ClientConfig::default();
        apply_env(
            &mut config,
            Some("https://chattrix.example.com/api".to_string()),
            None,
        );
        assert_eq!(config.api_base(), "https://chattrix.example.com/api");
        assert_eq!(config.media_base(), "https://chattrix.example.com");

        apply_env(&mut config, Some("  ".to_string()), Some("https://cdn.example.com".to_string()));
        assert_eq!(config.api_base(), "https://chattrix.example.com/api");
        assert_eq!(config.media_base(), "https://cdn.example.com");
    }

    #[tokio::test]
    async fn test_sleep_returns() {
        sleep(Duration::from_millis(1)).await;
    }
}
