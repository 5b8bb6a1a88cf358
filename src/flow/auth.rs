//! Session/auth gate: login and signup.
//!
//! Login persists the bearer token on success and routes to the dashboard.
//! Signup validates locally first (both observed policies, as a superset:
//! password confirmation AND at least one uppercase character) and only then
//! touches the network; the post-success redirect is deferred by a fixed
//! 2-second UX timer surfaced to the driver as data.

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::backend::Backend;
use crate::errors::AuthError;
use crate::nav::Route;
use crate::session::Session;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "회원가입이 완료되었습니다!";
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub struct LoginScreen {
  pub username: String,
  pub password: String,
  /// Inline message near the form; cleared on every new attempt.
  pub error: Option<String>,
}

impl LoginScreen {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attempt a login with the current inputs. Returns the destination route
  /// on success; on any failure sets `error` and returns None so the screen
  /// stays put.
  #[instrument(level = "info", skip_all, fields(username_len = self.username.len()))]
  pub async fn submit(&mut self, backend: &dyn Backend, session: &mut Session) -> Option<Route> {
    self.error = None;

    match backend.login(&self.username, &self.password).await {
      Ok(out) => match out.access_token {
        Some(token) => {
          session.set_token(token);
          info!(target: "flow", "Login ok; token persisted");
          Some(Route::Dashboard)
        }
        None => {
          // 200 without a token field: an error, not a success.
          warn!(target: "flow", "Login answered 200 without a token");
          self.error = Some(AuthError::TokenMissing.to_string());
          None
        }
      },
      Err(e) => {
        warn!(target: "flow", error = %e, "Login failed");
        self.error = Some(AuthError::from(e).to_string());
        None
      }
    }
  }
}

/// Outcome of a successful signup: show the message, then navigate after the
/// fixed delay. The delay is cosmetic and executed only by the driver.
#[derive(Debug, PartialEq, Eq)]
pub struct SignupSuccess {
  pub message: &'static str,
  pub redirect: Route,
  pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct SignupScreen {
  pub username: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
  pub error: Option<String>,
}

impl SignupScreen {
  pub fn new() -> Self {
    Self::default()
  }

  /// Local password policy; both checks must pass before any network call.
  fn validate_locally(&self) -> Result<(), AuthError> {
    if self.password != self.confirm_password {
      return Err(AuthError::PasswordMismatch);
    }
    if !self.password.chars().any(|c| c.is_uppercase()) {
      return Err(AuthError::MissingUppercase);
    }
    Ok(())
  }

  #[instrument(level = "info", skip_all, fields(username_len = self.username.len()))]
  pub async fn submit(&mut self, backend: &dyn Backend) -> Option<SignupSuccess> {
    self.error = None;

    if let Err(e) = self.validate_locally() {
      warn!(target: "flow", error = %e, "Signup rejected locally");
      self.error = Some(e.to_string());
      return None;
    }

    match backend.signup(&self.username, &self.email, &self.password).await {
      Ok(()) => {
        info!(target: "flow", "Signup ok; redirect deferred");
        Some(SignupSuccess {
          message: SIGNUP_SUCCESS_MESSAGE,
          redirect: Route::Login,
          delay: SIGNUP_REDIRECT_DELAY,
        })
      }
      Err(e) => {
        warn!(target: "flow", error = %e, "Signup failed");
        self.error = Some(AuthError::from(e).to_string());
        None
      }
    }
  }
}
