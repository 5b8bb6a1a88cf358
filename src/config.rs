//! Client configuration (API endpoint, login encoding, token path) from TOML
//! plus environment overrides.
//!
//! The API base URL is a configuration value, not a contract: it has changed
//! across deployments, so nothing in the code hardcodes it.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

/// Which body encoding the login endpoint expects. Both variants have been
/// observed in the wild; JSON is the documented default.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginEncoding {
  #[default]
  Json,
  Form,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Base URL of the Haeksim API. None means no real backend is configured
  /// and the scripted client is used instead.
  pub api_base_url: Option<String>,
  pub request_timeout_secs: u64,
  pub login_encoding: LoginEncoding,
  /// Durable storage for the bearer token (key `access_token`).
  pub token_path: PathBuf,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      api_base_url: None,
      request_timeout_secs: 20,
      login_encoding: LoginEncoding::Json,
      token_path: PathBuf::from(".haeksim_token.json"),
    }
  }
}

impl AppConfig {
  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs)
  }

  /// Load from HAEKSIM_CONFIG_PATH (TOML, optional), then apply env
  /// overrides: HAEKSIM_API_URL and HAEKSIM_TOKEN_PATH.
  pub fn load_from_env() -> Self {
    let mut cfg = match std::env::var("HAEKSIM_CONFIG_PATH") {
      Ok(path) => match std::fs::read_to_string(&path) {
        Ok(s) => match toml::from_str::<AppConfig>(&s) {
          Ok(cfg) => {
            info!(target: "haeksim", %path, "Loaded client config (TOML)");
            cfg
          }
          Err(e) => {
            error!(target: "haeksim", %path, error = %e, "Failed to parse TOML config; using defaults");
            AppConfig::default()
          }
        },
        Err(e) => {
          error!(target: "haeksim", %path, error = %e, "Failed to read TOML config file; using defaults");
          AppConfig::default()
        }
      },
      Err(_) => AppConfig::default(),
    };

    if let Ok(url) = std::env::var("HAEKSIM_API_URL") {
      cfg.api_base_url = Some(url);
    }
    if let Ok(p) = std::env::var("HAEKSIM_TOKEN_PATH") {
      cfg.token_path = PathBuf::from(p);
    }
    cfg
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toml_overrides_defaults() {
    let cfg: AppConfig = toml::from_str(
      r#"
        api_base_url = "http://localhost:8000"
        login_encoding = "form"
        request_timeout_secs = 5
      "#,
    )
    .unwrap();
    assert_eq!(cfg.api_base_url.as_deref(), Some("http://localhost:8000"));
    assert_eq!(cfg.login_encoding, LoginEncoding::Form);
    assert_eq!(cfg.request_timeout(), Duration::from_secs(5));
    assert_eq!(cfg.token_path, PathBuf::from(".haeksim_token.json"));
  }

  #[test]
  fn empty_toml_is_all_defaults() {
    let cfg: AppConfig = toml::from_str("").unwrap();
    assert!(cfg.api_base_url.is_none());
    assert_eq!(cfg.login_encoding, LoginEncoding::Json);
    assert_eq!(cfg.request_timeout_secs, 20);
  }
}
