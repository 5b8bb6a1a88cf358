//! Pluggable backend boundary.
//!
//! Two implementations:
//!   - `HttpBackend`: the real client (reqwest) against the configured API
//!   - `ScriptedBackend`: deterministic canned responses for tests and for
//!     running the app with no server configured
//!
//! The bearer token is passed in explicitly per call; there is no hidden
//! request-interceptor state.

use async_trait::async_trait;

use crate::domain::PassageConfig;
use crate::errors::ApiError;
use crate::protocol::{GenerateOut, TokenOut};

pub mod http;
pub mod scripted;

pub use http::HttpBackend;
pub use scripted::ScriptedBackend;

#[async_trait]
pub trait Backend: Send + Sync {
  /// POST /auth/login. A 200 without a token field still returns Ok; the
  /// auth gate decides how to surface that.
  async fn login(&self, username: &str, password: &str) -> Result<TokenOut, ApiError>;

  /// POST /auth/signup. Local validation happens before this is called.
  async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError>;

  /// POST /passages/generate with the current configuration.
  async fn generate_passage(
    &self,
    bearer: Option<&str>,
    config: &PassageConfig,
  ) -> Result<GenerateOut, ApiError>;
}
