//! Application configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::APP_NAME;
use crate::errors::{RaceDeckError, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the dashboard backend
    pub server_url: String,
    /// Servers shown in the list, in display order
    pub servers: Vec<ServerEntry>,
    /// Push channel configuration
    pub push: PushConfig,
    /// UI configuration
    pub ui: UiConfig,
}

/// A configured game server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub id: String,
    pub name: String,
}

/// Framing spoken on the push channel WebSocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PushProtocol {
    /// Engine.IO v4 / Socket.IO text frames
    #[default]
    Socketio,
    /// `{"event": ..., "data": ...}` JSON envelopes
    Json,
}

/// Push channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub protocol: PushProtocol,
    /// Explicit WebSocket URL; derived from `server_url` when unset
    pub url: Option<String>,
    /// Delay between reconnection attempts
    pub reconnect_delay_ms: u64,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Reload the selected server's snapshot every N seconds (0 disables)
    pub refresh_interval_secs: u64,
    /// Redraw tick in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            servers: Vec::new(),
            push: PushConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            protocol: PushProtocol::default(),
            url: None,
            reconnect_delay_ms: 2000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 0,
            tick_rate_ms: 250,
        }
    }
}

impl AppConfig {
    /// Default config file location (`<config dir>/racedeck/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join("config.toml")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried and built-in defaults are used when it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    log::debug!(
                        "No config at {}, using defaults",
                        default_path.display()
                    );
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RaceDeckError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.server_url).map_err(|e| {
            RaceDeckError::Config(format!("invalid server_url '{}': {}", self.server_url, e))
        })?;

        let mut seen = HashSet::new();
        for server in &self.servers {
            if server.id.trim().is_empty() {
                return Err(RaceDeckError::Config(
                    "server id must not be empty".to_string(),
                ));
            }
            if !seen.insert(server.id.as_str()) {
                return Err(RaceDeckError::Config(format!(
                    "duplicate server id '{}'",
                    server.id
                )));
            }
        }
        Ok(())
    }

    /// WebSocket URL of the push channel
    pub fn push_url(&self) -> Result<String> {
        if let Some(url) = &self.push.url {
            return Ok(url.clone());
        }

        let mut url = Url::parse(&self.server_url).map_err(|e| {
            RaceDeckError::Config(format!("invalid server_url '{}': {}", self.server_url, e))
        })?;
        let scheme = match url.scheme() {
            "https" => "wss",
            _ => "ws",
        };
        url.set_scheme(scheme)
            .map_err(|_| RaceDeckError::Config(format!("cannot derive push URL from {}", url)))?;

        // Keep any path prefix so HTTP and push share the same root behind a proxy
        let prefix = url.path().trim_end_matches('/').to_string();
        match self.push.protocol {
            PushProtocol::Socketio => {
                url.set_path(&format!("{}/socket.io/", prefix));
                url.set_query(Some("EIO=4&transport=websocket"));
            }
            PushProtocol::Json => {
                url.set_path(&format!("{}/ws", prefix));
                url.set_query(None);
            }
        }
        Ok(url.to_string())
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.push.reconnect_delay_ms)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.ui.refresh_interval_secs > 0)
            .then(|| Duration::from_secs(self.ui.refresh_interval_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
server_url = "http://race.example.net:5000"

[[servers]]
id = "drift-practice-01"
name = "Drift Practice 01"

[[servers]]
id = "shutoku-rush-hour"
name = "Shutoku Rush Hour"

[ui]
refresh_interval_secs = 5
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.servers[1].id, "shutoku-rush-hour");
        assert_eq!(config.push.protocol, PushProtocol::Socketio);
        assert_eq!(config.push.reconnect_delay_ms, 2000);
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(5)));
        assert_eq!(config.ui.tick_rate_ms, 250);
        config.validate().unwrap();
    }

    #[test]
    fn test_derived_push_urls() {
        let mut config = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(
            config.push_url().unwrap(),
            "ws://race.example.net:5000/socket.io/?EIO=4&transport=websocket"
        );

        config.push.protocol = PushProtocol::Json;
        config.server_url = "https://race.example.net".to_string();
        assert_eq!(config.push_url().unwrap(), "wss://race.example.net/ws");

        config.push.url = Some("ws://10.0.0.2:9000/events".to_string());
        assert_eq!(config.push_url().unwrap(), "ws://10.0.0.2:9000/events");
    }

    #[test]
    fn test_push_url_keeps_path_prefix() {
        let mut config = AppConfig {
            server_url: "http://race.example.net/dash".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.push_url().unwrap(),
            "ws://race.example.net/dash/socket.io/?EIO=4&transport=websocket"
        );

        config.server_url = "https://race.example.net/dash/".to_string();
        config.push.protocol = PushProtocol::Json;
        assert_eq!(config.push_url().unwrap(), "wss://race.example.net/dash/ws");
    }

    #[test]
    fn test_default_path_uses_app_dir() {
        assert!(AppConfig::default_path().ends_with("racedeck/config.toml"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut config = AppConfig::default();
        config.servers = vec![
            ServerEntry {
                id: "a".to_string(),
                name: "A".to_string(),
            },
            ServerEntry {
                id: "a".to_string(),
                name: "A again".to_string(),
            },
        ];
        assert!(matches!(config.validate(), Err(RaceDeckError::Config(_))));
    }

    #[test]
    fn test_invalid_server_url_rejected() {
        let config = AppConfig {
            server_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server_url, "http://race.example.net:5000");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(RaceDeckError::Config(_))));
    }
}
