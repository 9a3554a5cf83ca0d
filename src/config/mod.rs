use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SOCKET_PATH: &str = "/var/run/devil2.sock";
pub const DEFAULT_SOCKET_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FAIL_THRESHOLD: u32 = 5;
pub const DEFAULT_BLOCK_SECONDS: u64 = 300;
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DEVIL_API_KEY environment variable must be set before starting the API server")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub auth: AuthConfig,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub socket_path: PathBuf,
    pub timeout_secs: u64,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub api_key: String,
    pub fail_threshold: u32,
    pub block_seconds: u64,
}

// Keep the shared secret out of logs
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"<redacted>")
            .field("fail_threshold", &self.fail_threshold)
            .field("block_seconds", &self.block_seconds)
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            timeout_secs: DEFAULT_SOCKET_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Socket settings alone, for tools that never serve HTTP.
    pub fn from_env() -> Self {
        Self::default().with_overrides(&|key: &str| env::var(key).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DEVIL_SOCKET_PATH") {
            self.socket_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("DEVIL_SOCKET_TIMEOUT") {
            self.timeout_secs = v.parse().unwrap_or(self.timeout_secs);
        }
        self
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for anything unset or unparseable. The API key is mandatory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("DEVIL_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self::defaults(api_key).with_overrides(&lookup))
    }

    fn defaults(api_key: String) -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            backend: BackendConfig::default(),
            auth: AuthConfig {
                api_key,
                fail_threshold: DEFAULT_FAIL_THRESHOLD,
                block_seconds: DEFAULT_BLOCK_SECONDS,
            },
            log_level: "info".to_string(),
        }
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("DEVIL_API_HOST") {
            self.server.host = v;
        }
        if let Some(port) = lookup("DEVIL_API_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        self.backend = self.backend.with_overrides(lookup);

        // Auth overrides
        if let Some(v) = lookup("DEVIL_AUTH_FAIL_THRESHOLD") {
            self.auth.fail_threshold = v.parse().unwrap_or(self.auth.fail_threshold);
        }
        if let Some(v) = lookup("DEVIL_AUTH_BLOCK_SECONDS") {
            self.auth.block_seconds = v.parse().unwrap_or(self.auth.block_seconds);
        }

        if let Some(v) = lookup("LOG_LEVEL") {
            self.log_level = v.to_lowercase();
        }

        self
    }
}
