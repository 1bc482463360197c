use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub youtube: YouTubeConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            youtube: YouTubeConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_YOUTUBE_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env`, an optional TOML file and the process
    /// environment, in increasing order of precedence.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("TUBEPROXY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let file_contents = read_optional(&path)?;
        Self::from_sources(file_contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build a config from TOML text (if any) and an environment lookup.
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: AppConfig = match toml_text {
            Some(text) => toml::from_str(text).context("Invalid configuration file")?,
            None => AppConfig::default(),
        };

        if let Some(port) = env("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?;
        }
        if let Some(host) = env("HOST") {
            config.server.host = host;
        }
        if let Some(key) = env("API_KEY") {
            config.youtube.api_key = key;
        }
        if let Some(base) = env("YOUTUBE_API_BASE") {
            config.youtube.base_url = base;
        }
        if let Some(level) = env("LOG_LEVEL") {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.youtube.api_key.trim().is_empty() {
            bail!("API_KEY must be set (environment or [youtube].api_key)");
        }
        if self.youtube.base_url.trim().is_empty() {
            bail!("YouTube API base URL cannot be empty");
        }
        self.max_level()?;
        Ok(())
    }

    pub fn max_level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.log_level))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read config file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_api_key_from_env() {
        let config = AppConfig::from_sources(None, env_of(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.youtube.api_key, "secret");
        assert_eq!(config.youtube.base_url, DEFAULT_YOUTUBE_API_BASE);
        assert_eq!(config.max_level().unwrap(), Level::INFO);
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = AppConfig::from_sources(None, env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn env_overrides_file() {
        let toml_text = r#"
            log_level = "debug"

            [server]
            port = 8080

            [youtube]
            api_key = "from-file"
        "#;
        let config =
            AppConfig::from_sources(Some(toml_text), env_of(&[("PORT", "9090")])).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.youtube.api_key, "from-file");
        assert_eq!(config.max_level().unwrap(), Level::DEBUG);
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn bad_port_is_rejected() {
        let result =
            AppConfig::from_sources(None, env_of(&[("API_KEY", "k"), ("PORT", "http")]));
        assert!(result.is_err());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let result =
            AppConfig::from_sources(None, env_of(&[("API_KEY", "k"), ("LOG_LEVEL", "loud")]));
        assert!(result.is_err());
    }
}
