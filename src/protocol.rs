//! Request/response DTOs for the external Haeksim API (serde ready).
//! Keep this small and stable: field names are the wire contract.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, FeatureMode, GeneratedPassage, PassageConfig, Topic};

//
// POST /auth/login
//

/// JSON login body. The form-url-encoded variant sends the same two fields
/// as key/value pairs; see `HttpBackend`.
#[derive(Debug, Serialize)]
pub struct LoginIn<'a> {
  pub username: &'a str,
  pub password: &'a str,
}

/// Success body of login. `access_token` is optional on purpose: a 200
/// without it must surface "login succeeded but no token", not a parse error.
#[derive(Debug, Deserialize)]
pub struct TokenOut {
  #[serde(default)]
  pub access_token: Option<String>,
  #[serde(default)]
  pub token_type: Option<String>,
}

//
// POST /auth/signup
//

#[derive(Debug, Serialize)]
pub struct SignupIn<'a> {
  pub username: &'a str,
  pub email: &'a str,
  pub password: &'a str,
}

//
// POST /passages/generate
//

/// Generation request. `passageLength` stays camelCase; that is what the
/// backend schema declares.
#[derive(Debug, Serialize)]
pub struct GenerateIn {
  pub difficulty: Difficulty,
  pub topic: Topic,
  pub features: FeatureMode,
  #[serde(rename = "passageLength")]
  pub passage_length: u32,
}

impl GenerateIn {
  pub fn from_config(cfg: &PassageConfig) -> Self {
    Self {
      difficulty: cfg.difficulty,
      topic: cfg.topic,
      features: cfg.features,
      passage_length: cfg.passage_length(),
    }
  }
}

/// Generation response. Two observed flavors share one shape: summary mode
/// omits `choices`, quiz mode carries five of them.
#[derive(Debug, Deserialize)]
pub struct GenerateOut {
  #[serde(default)]
  pub title: Option<String>,
  pub passage: String,
  #[serde(default)]
  pub choices: Vec<String>,
}

impl From<GenerateOut> for GeneratedPassage {
  fn from(out: GenerateOut) -> Self {
    GeneratedPassage {
      title: out.title,
      passage: out.passage,
      choices: out.choices,
    }
  }
}

//
// Error bodies
//

/// `{"detail": ...}` where detail is either a plain string or a list of
/// validation-error objects carrying `msg`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
  Text(String),
  Items(Vec<ErrorItem>),
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
  msg: String,
}

/// Extract a human-readable message from an error response body.
/// Validation-error sequences are joined with `; `; a bare string is used
/// as-is; anything else yields None and the caller shows a generic message.
pub fn extract_error_message(body: &str) -> Option<String> {
  match serde_json::from_str::<ErrorBody>(body) {
    Ok(ErrorBody { detail: ErrorDetail::Text(s) }) => Some(s),
    Ok(ErrorBody { detail: ErrorDetail::Items(items) }) => {
      if items.is_empty() {
        None
      } else {
        Some(items.into_iter().map(|i| i.msg).collect::<Vec<_>>().join("; "))
      }
    }
    Err(_) => None,
  }
}
