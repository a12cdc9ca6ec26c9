//! Shared configuration for OneBusAway client applications.
//!
//! TOML file + environment layering (figment), API key resolution, and
//! translation into `oba_api` / `oba_core` runtime config. Consumers load
//! a [`Config`] once at startup and hand the derived pieces to the
//! services they construct.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use oba_api::{ClientConfig, TransportConfig};
use oba_core::{Region, RegionsServiceConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key configured (set api_key, api_key_env, or OBA_API_KEY)")]
    NoApiKey,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// API key, plaintext. Prefer `api_key_env` or the `OBA_API_KEY`
    /// environment variable.
    pub api_key: Option<String>,

    /// Name of an environment variable holding the API key.
    pub api_key_env: Option<String>,

    /// Stable per-install identifier sent as `app_uid`. Minted on first
    /// use when absent; call [`ensure_app_uid`] and save.
    pub app_uid: Option<String>,

    /// Consumer application version sent as `app_ver`.
    #[serde(default = "default_app_ver")]
    pub app_ver: String,

    /// Root of the regional discovery service.
    #[serde(default = "default_regions_base_url")]
    pub regions_base_url: String,

    /// Days between automatic region-list refreshes.
    #[serde(default = "default_refresh_days")]
    pub regions_refresh_days: u64,

    #[serde(default = "default_true")]
    pub automatically_select_region: bool,

    /// Override the data directory (defaults to the platform data dir).
    pub data_dir: Option<PathBuf>,

    /// Per-request timeout, seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: None,
            app_uid: None,
            app_ver: default_app_ver(),
            regions_base_url: default_regions_base_url(),
            regions_refresh_days: default_refresh_days(),
            automatically_select_region: true,
            data_dir: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_app_ver() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
fn default_regions_base_url() -> String {
    "https://regions.onebusaway.org".into()
}
fn default_refresh_days() -> u64 {
    7
}
fn default_true() -> bool {
    true
}
fn default_timeout() -> u64 {
    10
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "onebusaway", "oba").map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Resolve the data directory used for the regions preference store.
pub fn data_path(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.data_dir {
        return dir.clone();
    }
    ProjectDirs::from("org", "onebusaway", "oba")
        .map_or_else(dirs_fallback, |dirs| dirs.data_dir().to_path_buf())
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("oba");
    p
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load the full config from defaults, the config file, and `OBA_`-prefixed
/// environment variables, in increasing precedence.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("OBA_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, toml::to_string_pretty(config)?)?;
    Ok(())
}

// ── Derived values ──────────────────────────────────────────────────

/// Resolve the API key: env-var indirection first, then plaintext.
/// (`OBA_API_KEY` is handled upstream by the figment env layer, which
/// fills `api_key` directly.)
pub fn resolve_api_key(config: &Config) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = config.api_key_env {
        if let Ok(value) = std::env::var(env_name) {
            return Ok(SecretString::from(value));
        }
    }

    if let Some(ref key) = config.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoApiKey)
}

/// The install's `app_uid`, minting a fresh v4 UUID into `config` when
/// absent. Callers should [`save_config`] afterwards so the identity is
/// stable across runs.
pub fn ensure_app_uid(config: &mut Config) -> String {
    config
        .app_uid
        .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
        .clone()
}

/// The discovery service root as a typed URL.
pub fn regions_base_url(config: &Config) -> Result<Url, ConfigError> {
    config
        .regions_base_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "regions_base_url".into(),
            reason: format!("invalid URL: {}", config.regions_base_url),
        })
}

/// Transport settings shared by every client this config produces.
pub fn transport_config(config: &Config) -> TransportConfig {
    TransportConfig {
        timeout: Duration::from_secs(config.timeout_secs),
        ..TransportConfig::default()
    }
}

/// Build an `oba_api::ClientConfig` for `region`.
pub fn client_config(config: &Config, region: &Region) -> Result<ClientConfig, ConfigError> {
    let api_key = resolve_api_key(config)?;
    let app_uid = config.app_uid.clone().ok_or_else(|| ConfigError::Validation {
        field: "app_uid".into(),
        reason: "missing; call ensure_app_uid first".into(),
    })?;

    Ok(ClientConfig {
        base_url: region.base_url.clone(),
        api_key,
        app_uid,
        app_ver: config.app_ver.clone(),
        region_id: Some(region.id),
    })
}

/// Regions-service tuning derived from this config.
pub fn regions_service_config(config: &Config) -> RegionsServiceConfig {
    RegionsServiceConfig {
        refresh_interval: Duration::from_secs(config.regions_refresh_days * 24 * 60 * 60),
        automatically_select_region: config.automatically_select_region,
    }
}
