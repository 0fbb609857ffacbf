use std::path::PathBuf;
use std::time::Duration;

use crate::modules::admin::application::services::DEFAULT_ADMIN_FLAG_KEY;
use crate::modules::content::adapter::outgoing::local::DEFAULT_STORE_KEY;
use crate::modules::content::adapter::outgoing::remote::{
    remote_config::{DEFAULT_API_PREFIX, DEFAULT_TIMEOUT_SECS},
    EndpointStyle, RemoteApiConfig,
};
use crate::modules::content::adapter::outgoing::FallbackLogLevel;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOCAL_STORE_DIR: &str = "./data";
const DEFAULT_ANALYTICS_REFRESH_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when URL or key is missing: the API is then never contacted.
    pub remote: Option<RemoteApiConfig>,
    /// Directory of the file-backed key/value storage (admin flag and
    /// local content).
    pub storage_dir: PathBuf,
    /// Storage key of the local content document; `None` disables the
    /// local store.
    pub local_store_key: Option<String>,
    pub admin_flag_key: String,
    pub admin_password: Option<String>,
    pub fallback_log: FallbackLogLevel,
    pub analytics_refresh: Duration,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;

        let remote = match (get("CONTENT_API_URL"), get("CONTENT_API_KEY")) {
            (Some(base_url), Some(api_key)) => {
                let style = parse_or(&get, "CONTENT_API_STYLE", EndpointStyle::default())?;
                let timeout =
                    parse_secs(&get, "CONTENT_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
                let prefix =
                    get("CONTENT_API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

                Some(
                    RemoteApiConfig::new(base_url, api_key)
                        .with_prefix(prefix)
                        .with_style(style)
                        .with_timeout(timeout),
                )
            }
            _ => None,
        };

        let local_enabled = parse_or(&get, "LOCAL_STORE_ENABLED", true)?;
        let local_store_key = local_enabled
            .then(|| get("LOCAL_STORE_KEY").unwrap_or_else(|| DEFAULT_STORE_KEY.to_string()));

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            remote,
            storage_dir: PathBuf::from(
                get("LOCAL_STORE_DIR").unwrap_or_else(|| DEFAULT_LOCAL_STORE_DIR.to_string()),
            ),
            local_store_key,
            admin_flag_key: get("ADMIN_FLAG_KEY")
                .unwrap_or_else(|| DEFAULT_ADMIN_FLAG_KEY.to_string()),
            admin_password: get("ADMIN_PASSWORD"),
            fallback_log: parse_or(&get, "CONTENT_FALLBACK_LOG", FallbackLogLevel::default())?,
            analytics_refresh: parse_secs(
                &get,
                "ANALYTICS_REFRESH_SECS",
                DEFAULT_ANALYTICS_REFRESH_SECS,
            )?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

/// Whole seconds; zero is rejected since both timers need a non-zero period.
fn parse_secs<G>(get: &G, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match parse_or(get, name, default)? {
        0 => Err(ConfigError::Invalid {
            name,
            value: "0".to_string(),
            reason: "must be at least 1 second".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}
