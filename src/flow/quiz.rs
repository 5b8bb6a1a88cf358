//! Quiz exercise controller: one multiple-choice selection plus one written
//! justification per option.
//!
//! Completion predicate (recomputed on every mutation): a choice is selected
//! AND every justification is non-blank after trimming. Submission is gated
//! on it; the summary screen deliberately has no such gate.

use tracing::{info, instrument, warn};

use crate::domain::{ExercisePayload, FeatureMode, GeneratedPassage, QuizAnswers};
use crate::nav::Route;
use crate::session::Session;

pub const SUBMIT_BLOCKED_MESSAGE: &str =
  "선택지를 고르고 모든 서술 작성을 채워야 제출할 수 있습니다.";

#[derive(Debug)]
pub struct QuizScreen {
  passage: GeneratedPassage,
  /// 1-based, mirroring the ①–⑤ labels.
  pub selected_choice: Option<usize>,
  justifications: Vec<String>,
  /// Blocking message shown when submission is attempted too early.
  pub notice: Option<String>,
}

impl QuizScreen {
  /// Build from the session payload; degrades to the fallback when the user
  /// deep-linked here without generating a passage (or generated a summary).
  pub fn from_session(session: &Session) -> Self {
    let passage = match session.exercise_or_fallback(FeatureMode::ProblemSolving) {
      ExercisePayload::Quiz(p) => p,
      ExercisePayload::Summary(_) => {
        warn!(target: "flow", "Quiz screen opened with a summary payload; using fallback");
        match ExercisePayload::fallback(FeatureMode::ProblemSolving) {
          ExercisePayload::Quiz(p) => p,
          ExercisePayload::Summary(p) => p,
        }
      }
    };
    let justifications = vec![String::new(); passage.choices.len()];
    Self { passage, selected_choice: None, justifications, notice: None }
  }

  pub fn passage(&self) -> &GeneratedPassage {
    &self.passage
  }

  pub fn justifications(&self) -> &[String] {
    &self.justifications
  }

  /// Select a choice (1-based). Re-selecting the same value stays selected;
  /// out-of-range indices are ignored.
  pub fn select_choice(&mut self, choice: usize) {
    if choice >= 1 && choice <= self.passage.choices.len() {
      self.selected_choice = Some(choice);
    }
  }

  /// Replace justification `index` (0-based) in place. No trimming here;
  /// trimming happens only in the completion check.
  pub fn edit_justification(&mut self, index: usize, text: String) {
    if let Some(slot) = self.justifications.get_mut(index) {
      *slot = text;
    }
  }

  pub fn completed(&self) -> bool {
    self.selected_choice.is_some()
      && !self.justifications.is_empty()
      && self.justifications.iter().all(|j| !j.trim().is_empty())
  }

  /// (answered, total): non-blank justifications plus the choice slot.
  pub fn progress(&self) -> (usize, usize) {
    let answered = self.justifications.iter().filter(|j| !j.trim().is_empty()).count()
      + usize::from(self.selected_choice.is_some());
    (answered, self.passage.choices.len() + 1)
  }

  /// 총 작성 글자 수 across all justifications.
  pub fn char_count(&self) -> usize {
    self.justifications.iter().map(|j| j.chars().count()).sum()
  }

  /// Submit: blocked with an inline message until complete; otherwise hands
  /// the answer set to the analysis presenter and navigates forward.
  #[instrument(level = "info", skip_all, fields(completed = self.completed()))]
  pub fn submit(&mut self, session: &mut Session) -> Option<Route> {
    if !self.completed() {
      self.notice = Some(SUBMIT_BLOCKED_MESSAGE.into());
      return None;
    }
    self.notice = None;
    session.put_answers(QuizAnswers {
      selected_choice: self.selected_choice.expect("checked by completed()"),
      justifications: self.justifications.clone(),
    });
    info!(target: "flow", "Quiz submitted");
    Some(Route::QuizResults)
  }

  /// 새 문제 생성: clear everything for a fresh attempt.
  pub fn reset(&mut self) {
    self.selected_choice = None;
    for j in &mut self.justifications {
      j.clear();
    }
    self.notice = None;
  }
}
