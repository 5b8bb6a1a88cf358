//! Passage configuration collector and generation dispatcher.
//!
//! One POST per 생성 시작 press, guarded two ways:
//!   - re-entrancy: while `submitting`, further requests are ignored
//!     (double-clicks cannot produce duplicate in-flight requests)
//!   - staleness: every request carries an epoch ticket; a response whose
//!     ticket no longer matches (user navigated back, or a newer request
//!     started) is dropped instead of mutating state behind the user
//!
//! `features` is the sole router key: one successful response routes to
//! exactly one of the two exercise screens.

use tracing::{info, instrument, warn};

use crate::backend::Backend;
use crate::domain::{Difficulty, ExercisePayload, FeatureMode, PassageConfig, Topic};
use crate::errors::ApiError;
use crate::nav::Route;
use crate::protocol::GenerateOut;
use crate::session::Session;

/// Proof that a generation request was started; consumed on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

#[derive(Debug, Default)]
pub struct SettingsScreen {
  pub config: PassageConfig,
  submitting: bool,
  epoch: u64,
  pub error: Option<String>,
}

impl SettingsScreen {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_submitting(&self) -> bool {
    self.submitting
  }

  pub fn select_difficulty(&mut self, difficulty: Difficulty) {
    self.config.difficulty = difficulty;
  }

  pub fn select_topic(&mut self, topic: Topic) {
    self.config.topic = topic;
  }

  pub fn select_features(&mut self, features: FeatureMode) {
    self.config.features = features;
  }

  pub fn set_passage_length(&mut self, length: u32) {
    self.config.set_passage_length(length);
  }

  /// Start a request. None while one is already in flight.
  pub fn begin(&mut self) -> Option<GenerationTicket> {
    if self.submitting {
      warn!(target: "flow", "Generation already in flight; ignoring re-entrant request");
      return None;
    }
    self.submitting = true;
    self.error = None;
    self.epoch += 1;
    Some(GenerationTicket(self.epoch))
  }

  /// Apply a finished request. Stale tickets are dropped: the screen was
  /// left, or a newer request superseded this one.
  #[instrument(level = "info", skip(self, result, session), fields(epoch = ticket.0))]
  pub fn complete(
    &mut self,
    ticket: GenerationTicket,
    result: Result<GenerateOut, ApiError>,
    session: &mut Session,
  ) -> Option<Route> {
    if ticket.0 != self.epoch || !self.submitting {
      warn!(target: "flow", "Dropping stale generation response");
      return None;
    }
    self.submitting = false;

    match result {
      Ok(out) => {
        let (payload, route) = match self.config.features {
          FeatureMode::ProblemSolving => (ExercisePayload::Quiz(out.into()), Route::QuizPage),
          FeatureMode::CoreComprehension => {
            (ExercisePayload::Summary(out.into()), Route::SummaryPractice)
          }
        };
        session.put_exercise(payload);
        info!(target: "flow", to = route.path(), "Generation ok; routing by feature mode");
        Some(route)
      }
      Err(e) => {
        // Stay on the settings screen; the user retries by hand.
        self.error = Some(e.to_string());
        None
      }
    }
  }

  /// The user navigated away. The in-flight request is not cancelled, but
  /// bumping the epoch guarantees its late response is discarded.
  pub fn leave(&mut self) {
    self.submitting = false;
    self.epoch += 1;
  }

  /// Convenience for the driver: begin, dispatch, complete in one await.
  pub async fn request_generation(
    &mut self,
    backend: &dyn Backend,
    session: &mut Session,
  ) -> Option<Route> {
    let ticket = self.begin()?;
    let result = backend.generate_passage(session.bearer(), &self.config).await;
    self.complete(ticket, result, session)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::backend::ScriptedBackend;
  use crate::session::TokenStore;

  fn session() -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let s = Session::new(TokenStore::new(dir.path().join("token.json")));
    (dir, s)
  }

  #[tokio::test]
  async fn quiz_mode_routes_to_quiz_with_choices() {
    let backend = ScriptedBackend::new();
    let (_dir, mut session) = session();
    let mut screen = SettingsScreen::new();
    screen.select_features(FeatureMode::ProblemSolving);
    screen.select_topic(Topic::Society);

    let route = screen.request_generation(&backend, &mut session).await;
    assert_eq!(route, Some(Route::QuizPage));
    match session.exercise_or_fallback(FeatureMode::ProblemSolving) {
      ExercisePayload::Quiz(p) => assert_eq!(p.choices.len(), 5),
      other => panic!("expected quiz payload, got {:?}", other),
    }
    assert!(!screen.is_submitting());
  }

  #[tokio::test]
  async fn summary_mode_routes_to_summary_practice() {
    let backend = ScriptedBackend::new();
    let (_dir, mut session) = session();
    let mut screen = SettingsScreen::new();
    screen.select_features(FeatureMode::CoreComprehension);

    let route = screen.request_generation(&backend, &mut session).await;
    assert_eq!(route, Some(Route::SummaryPractice));
    match session.exercise_or_fallback(FeatureMode::CoreComprehension) {
      ExercisePayload::Summary(p) => assert!(p.choices.is_empty()),
      other => panic!("expected summary payload, got {:?}", other),
    }
  }

  #[test]
  fn reentrant_begin_is_ignored_while_submitting() {
    let mut screen = SettingsScreen::new();
    let first = screen.begin();
    assert!(first.is_some());
    assert!(screen.begin().is_none());
  }

  #[tokio::test]
  async fn failure_sets_inline_error_and_stays() {
    let backend = ScriptedBackend::new();
    backend.fail_next_generate(ApiError::Rejected("지문 생성에 실패했습니다.".into()));
    let (_dir, mut session) = session();
    let mut screen = SettingsScreen::new();

    let route = screen.request_generation(&backend, &mut session).await;
    assert_eq!(route, None);
    assert_eq!(screen.error.as_deref(), Some("지문 생성에 실패했습니다."));
    assert!(!screen.is_submitting());
    // Configuration is untouched; the user may retry immediately.
    assert!(screen.begin().is_some());
  }

  #[tokio::test]
  async fn response_arriving_after_leave_is_dropped() {
    let backend = ScriptedBackend::new();
    let (_dir, mut session) = session();
    let mut screen = SettingsScreen::new();
    screen.select_features(FeatureMode::ProblemSolving);

    let ticket = screen.begin().expect("ticket");
    let result = backend.generate_passage(None, &screen.config).await;
    screen.leave();

    let route = screen.complete(ticket, result, &mut session);
    assert_eq!(route, None);
    // Nothing was written for the next screen: deep-linking now degrades
    // to the fallback payload.
    let payload = session.exercise_or_fallback(FeatureMode::ProblemSolving);
    assert!(payload.passage().choices.is_empty());
  }

  #[tokio::test]
  async fn superseded_response_loses_to_the_newer_request() {
    let backend = ScriptedBackend::new();
    let (_dir, mut session) = session();
    let mut screen = SettingsScreen::new();
    screen.select_features(FeatureMode::ProblemSolving);

    let stale = screen.begin().expect("ticket");
    let stale_result = backend.generate_passage(None, &screen.config).await;
    screen.leave();

    let fresh = screen.begin().expect("ticket");
    let fresh_result = backend.generate_passage(None, &screen.config).await;

    assert_eq!(screen.complete(stale, stale_result, &mut session), None);
    assert_eq!(
      screen.complete(fresh, fresh_result, &mut session),
      Some(Route::QuizPage)
    );
  }
}
