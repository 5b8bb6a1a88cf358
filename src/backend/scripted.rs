//! Scripted backend: canned users and seed passages, no network, no timers.
//!
//! Used when no API base URL is configured, and by tests that need to run
//! deterministically. Call counters let tests assert that local validation
//! failures never reached the "network".

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{info, instrument};

use crate::domain::{FeatureMode, PassageConfig};
use crate::errors::ApiError;
use crate::protocol::{GenerateOut, TokenOut};
use crate::seeds::{hard_fallback_passage, seed_passages};

use super::Backend;

const BAD_CREDENTIALS: &str = "아이디 또는 비밀번호가 올바르지 않습니다.";
const DUPLICATE_USER: &str = "이미 존재하는 사용자 이름 또는 이메일입니다.";

/// Username whose login answers 200 without a token field, to exercise the
/// "login succeeded but no token" path end to end.
pub const NO_TOKEN_USER: &str = "tokenless";

pub struct ScriptedBackend {
  users: Mutex<HashMap<String, String>>,
  login_calls: AtomicU32,
  signup_calls: AtomicU32,
  generate_calls: AtomicU32,
  fail_next_login: Mutex<Option<ApiError>>,
  fail_next_generate: Mutex<Option<ApiError>>,
}

impl ScriptedBackend {
  pub fn new() -> Self {
    let mut users = HashMap::new();
    // One canned account so the demo driver works out of the box.
    users.insert("haeksim".to_string(), "Haeksim1".to_string());
    Self {
      users: Mutex::new(users),
      login_calls: AtomicU32::new(0),
      signup_calls: AtomicU32::new(0),
      generate_calls: AtomicU32::new(0),
      fail_next_login: Mutex::new(None),
      fail_next_generate: Mutex::new(None),
    }
  }

  pub fn login_calls(&self) -> u32 {
    self.login_calls.load(Ordering::Relaxed)
  }

  pub fn signup_calls(&self) -> u32 {
    self.signup_calls.load(Ordering::Relaxed)
  }

  pub fn generate_calls(&self) -> u32 {
    self.generate_calls.load(Ordering::Relaxed)
  }

  /// Make the next login attempt fail with `err` (script a server rejection
  /// or an outage).
  pub fn fail_next_login(&self, err: ApiError) {
    *self.fail_next_login.lock().expect("lock") = Some(err);
  }

  pub fn fail_next_generate(&self, err: ApiError) {
    *self.fail_next_generate.lock().expect("lock") = Some(err);
  }
}

impl Default for ScriptedBackend {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl Backend for ScriptedBackend {
  #[instrument(level = "info", skip(self, password))]
  async fn login(&self, username: &str, password: &str) -> Result<TokenOut, ApiError> {
    self.login_calls.fetch_add(1, Ordering::Relaxed);
    if let Some(err) = self.fail_next_login.lock().expect("lock").take() {
      return Err(err);
    }

    if username == NO_TOKEN_USER {
      return Ok(TokenOut { access_token: None, token_type: None });
    }

    let users = self.users.lock().expect("lock");
    match users.get(username) {
      Some(expected) if expected == password => {
        info!(target: "haeksim", %username, "Scripted login ok");
        Ok(TokenOut {
          access_token: Some(format!("scripted-token-{}", username)),
          token_type: Some("bearer".into()),
        })
      }
      _ => Err(ApiError::Rejected(BAD_CREDENTIALS.into())),
    }
  }

  #[instrument(level = "info", skip(self, password, email))]
  async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    self.signup_calls.fetch_add(1, Ordering::Relaxed);
    let _ = email;

    let mut users = self.users.lock().expect("lock");
    if users.contains_key(username) {
      return Err(ApiError::Rejected(DUPLICATE_USER.into()));
    }
    users.insert(username.to_string(), password.to_string());
    info!(target: "haeksim", %username, "Scripted signup ok");
    Ok(())
  }

  #[instrument(level = "info", skip(self, _bearer, config), fields(topic = config.topic.label()))]
  async fn generate_passage(
    &self,
    _bearer: Option<&str>,
    config: &PassageConfig,
  ) -> Result<GenerateOut, ApiError> {
    self.generate_calls.fetch_add(1, Ordering::Relaxed);
    if let Some(err) = self.fail_next_generate.lock().expect("lock").take() {
      return Err(err);
    }

    let pool: Vec<_> = seed_passages().iter().filter(|s| s.topic == config.topic).collect();
    let seed = pool
      .choose(&mut rand::thread_rng())
      .copied()
      .unwrap_or_else(hard_fallback_passage);

    let choices = match config.features {
      FeatureMode::ProblemSolving => seed.choices.iter().map(|c| c.to_string()).collect(),
      FeatureMode::CoreComprehension => Vec::new(),
    };

    info!(target: "haeksim", title = seed.title, choices = choices.len(), "Scripted passage served");
    Ok(GenerateOut {
      title: Some(seed.title.to_string()),
      passage: seed.passage.to_string(),
      choices,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Topic;

  #[test]
  fn quiz_mode_gets_choices_summary_mode_does_not() {
    let backend = ScriptedBackend::new();
    let rt = tokio::runtime::Builder::new_current_thread().build().expect("rt");

    let mut cfg = PassageConfig::default();
    cfg.features = FeatureMode::ProblemSolving;
    cfg.topic = Topic::Humanities;
    let quiz = rt.block_on(backend.generate_passage(None, &cfg)).expect("quiz");
    assert_eq!(quiz.choices.len(), 5);

    cfg.features = FeatureMode::CoreComprehension;
    let summary = rt.block_on(backend.generate_passage(None, &cfg)).expect("summary");
    assert!(summary.choices.is_empty());
    assert_eq!(backend.generate_calls(), 2);
  }

  #[test]
  fn signup_then_login_round_trips() {
    let backend = ScriptedBackend::new();
    let rt = tokio::runtime::Builder::new_current_thread().build().expect("rt");

    rt.block_on(backend.signup("newbie", "n@x.kr", "Abcdef1")).expect("signup");
    let out = rt.block_on(backend.login("newbie", "Abcdef1")).expect("login");
    assert!(out.access_token.is_some());

    let err = rt.block_on(backend.signup("newbie", "n@x.kr", "Abcdef1")).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
  }

  #[test]
  fn no_token_user_answers_200_without_token() {
    let backend = ScriptedBackend::new();
    let rt = tokio::runtime::Builder::new_current_thread().build().expect("rt");
    let out = rt.block_on(backend.login(NO_TOKEN_USER, "whatever")).expect("login");
    assert!(out.access_token.is_none());
  }
}
