use crate::errors::{AppError, AppResult};
use crate::store::STAGING_FILE;
use crate::utils::formatting::mask_secret;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Remote HR API flavour used by `push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Bearer token gateway, `POST {base}/api/plog/attendances`
    #[default]
    Plog,
    /// Bearer token gateway on the short path, `POST {base}/attendances`
    Gateway,
    /// Basic auth then bearer token, `POST {base}/auth` + `{base}/work_hours`
    Personio,
}

impl Backend {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plog" => Some(Self::Plog),
            "gateway" => Some(Self::Gateway),
            "personio" => Some(Self::Personio),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_staging_file")]
    pub staging_file: String,
    /// Raw backend name, only validated when `push` needs a sink.
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub token_function_key: Option<String>,
    #[serde(default)]
    pub personio_api_url: Option<String>,
    #[serde(default)]
    pub personio_api_key: Option<String>,
    #[serde(default)]
    pub personio_api_secret: Option<String>,
}

fn default_staging_file() -> String {
    STAGING_FILE.to_string()
}

fn default_backend() -> String {
    "plog".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            staging_file: default_staging_file(),
            backend: default_backend(),
            api_url: None,
            api_token: None,
            token_function_key: None,
            personio_api_url: None,
            personio_api_key: None,
            personio_api_secret: None,
        }
    }
}

/// Settings of the gateway backends, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub base_url: String,
    pub token: String,
}

/// Settings of the basic-auth backend, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonioSettings {
    pub base_url: String,
    pub key: String,
    pub secret: String,
}

/// Read an env var, treating empty values as unset.
fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("plog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".plog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("plog.conf")
    }

    /// Return the full path of the internal journal
    pub fn journal_file() -> PathBuf {
        Self::config_dir().join("plog.log")
    }

    /// Defaults, then the YAML config file (if any), then the environment.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    /// Override fields with the `PLOG_*` / `PERSONIO_*` environment.
    pub fn apply_env(&mut self) {
        if let Some(v) = env_value("PLOG_BACKEND") {
            self.backend = v;
        }
        if let Some(v) = env_value("PLOG_STAGING") {
            self.staging_file = v;
        }
        if let Some(v) = env_value("PLOG_API_URL") {
            self.api_url = Some(v);
        }
        if let Some(v) = env_value("PLOG_API_TOKEN") {
            self.api_token = Some(v);
        }
        if let Some(v) = env_value("PLOG_TOKEN_FUNCTION_KEY") {
            self.token_function_key = Some(v);
        }
        if let Some(v) = env_value("PERSONIO_API_URL") {
            self.personio_api_url = Some(v);
        }
        if let Some(v) = env_value("PERSONIO_API_KEY") {
            self.personio_api_key = Some(v);
        }
        if let Some(v) = env_value("PERSONIO_API_SECRET") {
            self.personio_api_secret = Some(v);
        }
    }

    /// Backend selected for `push`.
    pub fn backend(&self) -> AppResult<Backend> {
        if self.backend.trim().is_empty() {
            return Ok(Backend::default());
        }
        Backend::from_code(&self.backend).ok_or_else(|| {
            AppError::Config(format!(
                "Unknown PLOG_BACKEND '{}'. Use one of: plog, gateway, personio.",
                self.backend
            ))
        })
    }

    pub fn staging_path(&self) -> PathBuf {
        expand_tilde(&self.staging_file)
    }

    /// Credentials of the `plog` / `gateway` backends.
    pub fn gateway_settings(&self) -> AppResult<GatewaySettings> {
        match (non_empty(&self.api_url), non_empty(&self.api_token)) {
            (Some(base_url), Some(token)) => Ok(GatewaySettings { base_url, token }),
            _ => Err(AppError::Config(
                "Please define PLOG_API_URL and PLOG_API_TOKEN env variables and try again!"
                    .into(),
            )),
        }
    }

    /// Credentials of the `personio` backend. The base URL falls back to
    /// `PLOG_API_URL`.
    pub fn personio_settings(&self) -> AppResult<PersonioSettings> {
        let base_url = non_empty(&self.personio_api_url).or_else(|| non_empty(&self.api_url));
        match (
            base_url,
            non_empty(&self.personio_api_key),
            non_empty(&self.personio_api_secret),
        ) {
            (Some(base_url), Some(key), Some(secret)) => Ok(PersonioSettings {
                base_url,
                key,
                secret,
            }),
            _ => Err(AppError::Config(
                "Please define PERSONIO_API_URL (or PLOG_API_URL), PERSONIO_API_KEY and PERSONIO_API_SECRET env variables and try again!"
                    .into(),
            )),
        }
    }

    /// Base URL and function key for the admin `token` command.
    pub fn token_settings(&self) -> AppResult<(String, String)> {
        let key = non_empty(&self.token_function_key).ok_or_else(|| {
            AppError::Config(
                "Please set the ENV variable PLOG_TOKEN_FUNCTION_KEY to use this feature.".into(),
            )
        })?;
        let base_url = non_empty(&self.api_url).ok_or_else(|| {
            AppError::Config("Please define the PLOG_API_URL env variable and try again!".into())
        })?;
        Ok((base_url, key))
    }

    /// Copy of the configuration that is safe to print.
    pub fn redacted(&self) -> Self {
        let mask = |v: &Option<String>| v.as_deref().map(mask_secret);
        Self {
            api_token: mask(&self.api_token),
            token_function_key: mask(&self.token_function_key),
            personio_api_key: mask(&self.personio_api_key),
            personio_api_secret: mask(&self.personio_api_secret),
            ..self.clone()
        }
    }
}
