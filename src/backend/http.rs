//! Real HTTP client for the Haeksim API.
//!
//! Calls are instrumented and log status and latency, never credentials or
//! passage contents. Error mapping:
//!   - transport failure (no response) -> ApiError::Unreachable
//!   - non-2xx -> ApiError::Rejected with the message extracted from the
//!     `detail` body, or a generic message when the body is opaque
//!   - unusable 2xx body -> ApiError::Malformed

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{RequestBuilder, Response};
use tracing::{error, info, instrument};

use crate::config::{AppConfig, LoginEncoding};
use crate::domain::PassageConfig;
use crate::errors::ApiError;
use crate::protocol::{extract_error_message, GenerateIn, GenerateOut, LoginIn, SignupIn, TokenOut};

use super::Backend;

const GENERIC_REJECTION: &str = "요청이 실패했습니다. 잠시 후 다시 시도해 주세요.";

pub struct HttpBackend {
  client: reqwest::Client,
  base_url: String,
  login_encoding: LoginEncoding,
}

impl HttpBackend {
  /// Build the client from config. Returns None when no base URL is
  /// configured (the caller falls back to the scripted backend).
  pub fn from_config(cfg: &AppConfig) -> Option<Self> {
    let base_url = cfg.api_base_url.clone()?;
    let client = reqwest::Client::builder()
      .timeout(cfg.request_timeout())
      .build()
      .ok()?;
    Some(Self { client, base_url, login_encoding: cfg.login_encoding })
  }

  #[cfg(test)]
  fn for_tests(base_url: String) -> Self {
    Self {
      client: reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .expect("client"),
      base_url,
      login_encoding: LoginEncoding::Json,
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  fn decorate(&self, req: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    let req = req.header(USER_AGENT, "haeksim/0.1");
    match bearer {
      // Attach the credential whenever present; absent means the request
      // goes out unauthenticated.
      Some(token) => req.header(AUTHORIZATION, format!("Bearer {}", token)),
      None => req,
    }
  }

  /// Shared response handling: status check + error-body extraction.
  async fn check(&self, res: Result<Response, reqwest::Error>, what: &str) -> Result<Response, ApiError> {
    let res = res.map_err(|e| {
      error!(target: "haeksim", error = %e, %what, "Transport failure (no response)");
      ApiError::Unreachable
    })?;

    let status = res.status();
    if status.is_success() {
      return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let msg = extract_error_message(&body).unwrap_or_else(|| GENERIC_REJECTION.to_string());
    error!(target: "haeksim", %status, %what, message = %msg, "Request rejected");
    Err(ApiError::Rejected(msg))
  }
}

#[async_trait]
impl Backend for HttpBackend {
  #[instrument(level = "info", skip(self, password), fields(username_len = username.len()))]
  async fn login(&self, username: &str, password: &str) -> Result<TokenOut, ApiError> {
    let url = self.url("/auth/login");
    let start = std::time::Instant::now();

    let req = self.decorate(self.client.post(&url), None);
    let res = match self.login_encoding {
      LoginEncoding::Json => {
        req
          .header(CONTENT_TYPE, "application/json")
          .json(&LoginIn { username, password })
          .send()
          .await
      }
      LoginEncoding::Form => {
        req
          .form(&[("username", username), ("password", password)])
          .send()
          .await
      }
    };

    let res = self.check(res, "login").await?;
    let out: TokenOut = res.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
    info!(
      target: "haeksim",
      elapsed = ?start.elapsed(),
      has_token = out.access_token.is_some(),
      token_type = out.token_type.as_deref().unwrap_or("-"),
      "Login response received"
    );
    Ok(out)
  }

  #[instrument(level = "info", skip(self, password), fields(username_len = username.len(), email_len = email.len()))]
  async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let url = self.url("/auth/signup");
    let res = self
      .decorate(self.client.post(&url), None)
      .header(CONTENT_TYPE, "application/json")
      .json(&SignupIn { username, email, password })
      .send()
      .await;

    // 200 and 201 both count as success; the body is not needed.
    self.check(res, "signup").await?;
    info!(target: "haeksim", "Signup accepted");
    Ok(())
  }

  #[instrument(
    level = "info",
    skip(self, bearer, config),
    fields(features = config.features.label(), topic = config.topic.label(), length = config.passage_length())
  )]
  async fn generate_passage(
    &self,
    bearer: Option<&str>,
    config: &PassageConfig,
  ) -> Result<GenerateOut, ApiError> {
    let url = self.url("/passages/generate");
    let start = std::time::Instant::now();

    let res = self
      .decorate(self.client.post(&url), bearer)
      .header(CONTENT_TYPE, "application/json")
      .json(&GenerateIn::from_config(config))
      .send()
      .await;

    let res = self.check(res, "generate_passage").await?;
    let out: GenerateOut = res.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
    info!(
      target: "haeksim",
      elapsed = ?start.elapsed(),
      passage_len = out.passage.len(),
      choices = out.choices.len(),
      "Passage generated"
    );
    Ok(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn unreachable_host_maps_to_transport_error() {
    // Reserved TEST-NET-1 address; nothing answers there.
    let backend = HttpBackend::for_tests("http://192.0.2.1:9".into());
    let err = backend.login("user", "pw").await.unwrap_err();
    assert_eq!(err, ApiError::Unreachable);
  }

  #[test]
  fn url_join_tolerates_trailing_slash() {
    let backend = HttpBackend::for_tests("http://localhost:8000/".into());
    assert_eq!(backend.url("/auth/login"), "http://localhost:8000/auth/login");
  }
}
