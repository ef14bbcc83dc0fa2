use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

pub const DEFAULT_TENOR_API_URL: &str = "https://tenor.googleapis.com/v2";
pub const DEFAULT_BLOB_UPLOAD_URL: &str = "https://bsky.social/xrpc/com.atproto.repo.uploadBlob";
pub const DEFAULT_CLIENT_KEY: &str = "graysky";

#[serde_as]
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_tenor_api_url")]
    pub tenor_api_url: String,
    pub tenor_api_key: String,
    #[serde(default = "default_client_key")]
    pub tenor_client_key: String,
    #[serde(default = "default_blob_upload_url")]
    pub blob_upload_url: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_http_timeout")]
    pub http_timeout: Duration,
    #[serde(default = "default_max_preview_bytes")]
    pub max_preview_bytes: usize,
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

fn default_env() -> String {
    "development".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_tenor_api_url() -> String {
    DEFAULT_TENOR_API_URL.to_string()
}

fn default_client_key() -> String {
    DEFAULT_CLIENT_KEY.to_string()
}

fn default_blob_upload_url() -> String {
    DEFAULT_BLOB_UPLOAD_URL.to_string()
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_max_preview_bytes() -> usize {
    crate::embed::builder::DEFAULT_MAX_PREVIEW_BYTES
}

impl AppConfig {
    pub fn new_from_file_and_env(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("gifrelay"))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Self>())
    }

    /// Config for tests and tools that point every upstream at one base URL.
    pub fn for_upstreams(tenor_api_url: &str, blob_upload_url: &str, api_key: &str) -> Self {
        Self {
            env: default_env(),
            bind_addr: default_bind_addr(),
            tenor_api_url: tenor_api_url.to_string(),
            tenor_api_key: api_key.to_string(),
            tenor_client_key: default_client_key(),
            blob_upload_url: blob_upload_url.to_string(),
            http_timeout: default_http_timeout(),
            max_preview_bytes: default_max_preview_bytes(),
            sentry_dsn: None,
        }
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

// The API key must never end up in logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("tenor_api_url", &self.tenor_api_url)
            .field("tenor_api_key", &"<redacted>")
            .field("tenor_client_key", &self.tenor_client_key)
            .field("blob_upload_url", &self.blob_upload_url)
            .field("http_timeout", &self.http_timeout)
            .field("max_preview_bytes", &self.max_preview_bytes)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "<set>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = AppConfig::for_upstreams("http://tenor", "http://blob", "super-secret");
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn loads_file_with_defaults() {
        let dir = std::env::temp_dir().join(format!("gif-relay-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("relay.toml");
        std::fs::write(&path, "tenor_api_key = \"abc\"\nhttp_timeout = 3\n").unwrap();

        let cfg = AppConfig::new_from_file_and_env(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.tenor_api_key, "abc");
        assert_eq!(cfg.http_timeout, Duration::from_secs(3));
        assert_eq!(cfg.tenor_client_key, DEFAULT_CLIENT_KEY);
        assert_eq!(cfg.tenor_api_url, DEFAULT_TENOR_API_URL);
        assert_eq!(cfg.blob_upload_url, DEFAULT_BLOB_UPLOAD_URL);
        assert_eq!(cfg.max_preview_bytes, 5 * 1024 * 1024);
        assert!(cfg.sentry_dsn.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
