//! Summary exercise controller: one bounded free-text field plus a font-size
//! control for passage display.
//!
//! The 500-character cap is enforced at the edit boundary (hard truncation,
//! by characters), not as a validation flag. Unlike the quiz screen there is
//! no completion gate on submit; that asymmetry is intentional.

use tracing::{info, instrument, warn};

use crate::domain::{ExercisePayload, FeatureMode, GeneratedPassage};
use crate::nav::Route;
use crate::session::Session;

pub const SUMMARY_MAX_CHARS: usize = 500;

pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 24;
pub const FONT_SIZE_STEP: u8 = 2;
pub const FONT_SIZE_DEFAULT: u8 = 16;

#[derive(Debug)]
pub struct SummaryScreen {
  passage: GeneratedPassage,
  text: String,
  font_size: u8,
}

impl SummaryScreen {
  pub fn from_session(session: &Session) -> Self {
    let passage = match session.exercise_or_fallback(FeatureMode::CoreComprehension) {
      ExercisePayload::Summary(p) => p,
      ExercisePayload::Quiz(p) => {
        // A quiz payload still has a passage worth summarizing; keep it.
        warn!(target: "flow", "Summary screen opened with a quiz payload; using its passage");
        p
      }
    };
    Self { passage, text: String::new(), font_size: FONT_SIZE_DEFAULT }
  }

  pub fn passage(&self) -> &GeneratedPassage {
    &self.passage
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  /// 글자 수 shown next to the input, counted in characters.
  pub fn char_count(&self) -> usize {
    self.text.chars().count()
  }

  /// Replace the draft. Anything beyond 500 characters is cut off here,
  /// whether typed or pasted.
  pub fn set_text(&mut self, input: &str) {
    if input.chars().count() <= SUMMARY_MAX_CHARS {
      self.text = input.to_string();
    } else {
      self.text = input.chars().take(SUMMARY_MAX_CHARS).collect();
    }
  }

  pub fn font_size(&self) -> u8 {
    self.font_size
  }

  pub fn increase_font(&mut self) {
    self.font_size = (self.font_size + FONT_SIZE_STEP).min(FONT_SIZE_MAX);
  }

  pub fn decrease_font(&mut self) {
    self.font_size = self.font_size.saturating_sub(FONT_SIZE_STEP).max(FONT_SIZE_MIN);
  }

  /// Unconditional: no completion gate, even on an empty draft.
  #[instrument(level = "info", skip_all, fields(chars = self.char_count()))]
  pub fn submit(&self, session: &mut Session) -> Route {
    session.put_summary(self.text.clone());
    info!(target: "flow", "Summary submitted");
    Route::LearningAnalysis
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::TokenStore;

  fn summary_session() -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new(TokenStore::new(dir.path().join("token.json")));
    session.put_exercise(ExercisePayload::Summary(GeneratedPassage {
      title: Some("제목".into()),
      passage: "본문".into(),
      choices: vec![],
    }));
    (dir, session)
  }

  #[test]
  fn text_is_truncated_at_the_edit_boundary() {
    let (_dir, session) = summary_session();
    let mut screen = SummaryScreen::from_session(&session);

    let long: String = "가".repeat(SUMMARY_MAX_CHARS + 120);
    screen.set_text(&long);
    assert_eq!(screen.char_count(), SUMMARY_MAX_CHARS);

    // Repeated edits never accumulate past the cap either.
    screen.set_text(&long);
    assert_eq!(screen.char_count(), SUMMARY_MAX_CHARS);
  }

  #[test]
  fn font_size_clamps_on_both_ends() {
    let (_dir, session) = summary_session();
    let mut screen = SummaryScreen::from_session(&session);
    assert_eq!(screen.font_size(), FONT_SIZE_DEFAULT);

    for _ in 0..12 {
      screen.decrease_font();
    }
    assert_eq!(screen.font_size(), FONT_SIZE_MIN);

    for _ in 0..10 {
      screen.increase_font();
    }
    assert_eq!(screen.font_size(), FONT_SIZE_MAX);
  }

  #[test]
  fn submit_is_unconditional_and_carries_the_draft() {
    let (_dir, mut session) = summary_session();
    let mut screen = SummaryScreen::from_session(&session);

    // Even an empty draft navigates forward (asymmetry with the quiz gate).
    assert_eq!(screen.submit(&mut session), Route::LearningAnalysis);
    assert_eq!(session.summary(), Some(""));

    screen.set_text("핵심 요약");
    assert_eq!(screen.submit(&mut session), Route::LearningAnalysis);
    assert_eq!(session.summary(), Some("핵심 요약"));
  }

  #[test]
  fn deep_link_without_payload_shows_fallback_passage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = Session::new(TokenStore::new(dir.path().join("token.json")));
    let screen = SummaryScreen::from_session(&session);
    assert!(screen.passage().passage.contains("불러오지 못했습니다"));
  }
}
