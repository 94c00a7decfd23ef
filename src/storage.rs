use crate::client::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(String),
    #[error("failed to parse settings: {0}")]
    Parse(String),
    #[error("failed to write settings: {0}")]
    Write(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub api_base_url: String,
    pub listen_addr: String,
    pub tls: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            tls: false,
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let api_url = self.api_base_url.trim();
        if api_url.is_empty() {
            return Err(SettingsError::Invalid("api_base_url must not be empty".to_string()));
        }
        let parsed = reqwest::Url::parse(api_url)
            .map_err(|err| SettingsError::Invalid(format!("api_base_url is not a valid URL: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SettingsError::Invalid(
                "api_base_url must use http or https".to_string(),
            ));
        }
        self.listen_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| SettingsError::Invalid(format!("listen_addr is invalid: {err}")))?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.listen_addr
            .trim()
            .parse()
            .map_err(|err| SettingsError::Invalid(format!("listen_addr is invalid: {err}")))
    }

    /// Applies `CHECKDASH_*` variables on top of the stored values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(API_URL_VAR).filter(|value| !value.trim().is_empty()) {
            self.api_base_url = value;
        }
        if let Some(value) = lookup(LISTEN_VAR).filter(|value| !value.trim().is_empty()) {
            self.listen_addr = value;
        }
        if let Some(value) = lookup(TLS_VAR) {
            self.tls = matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
    }
}

pub const API_URL_VAR: &str = "CHECKDASH_API_URL";
pub const LISTEN_VAR: &str = "CHECKDASH_LISTEN";
pub const TLS_VAR: &str = "CHECKDASH_TLS";
pub const SETTINGS_VAR: &str = "CHECKDASH_SETTINGS";

pub fn base_dir() -> PathBuf {
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("checkdash");
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("checkdash");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("checkdash");
    }
    PathBuf::from("checkdash-data")
}

pub fn settings_path() -> PathBuf {
    std::env::var(SETTINGS_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| base_dir().join("settings.json"))
}

pub async fn load_settings(path: &Path) -> Result<DashboardSettings, SettingsError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            serde_json::from_str(&contents).map_err(|err| SettingsError::Parse(err.to_string()))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(DashboardSettings::default()),
        Err(err) => Err(SettingsError::Read(err.to_string())),
    }
}

/// Loads the stored settings and layers the environment on top.
pub async fn effective_settings(path: &Path) -> Result<DashboardSettings, SettingsError> {
    let mut settings = load_settings(path).await?;
    settings.apply_env_overrides();
    Ok(settings)
}

pub async fn save_settings(path: &Path, settings: &DashboardSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| SettingsError::Write(format!("failed to create settings dir: {err}")))?;
    }

    let data = serde_json::to_string_pretty(settings)
        .map_err(|err| SettingsError::Write(format!("failed to serialize settings: {err}")))?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, data)
        .await
        .map_err(|err| SettingsError::Write(format!("failed to write temp settings: {err}")))?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|err| SettingsError::Write(format!("failed to move settings into place: {err}")))
}
