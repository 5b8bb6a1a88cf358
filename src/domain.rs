//! Domain models for the Haeksim flow: passage configuration, generated
//! payloads, answer state, and the analysis report.
//!
//! Enum variants serialize to the exact Korean labels the backend matches on,
//! so these types are also the wire vocabulary.

use serde::{Deserialize, Serialize};

/// Passage difficulty, single-select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
  #[serde(rename = "기초")]
  Basic,
  #[serde(rename = "보통")]
  Normal,
  #[serde(rename = "어려움")]
  Hard,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Basic, Difficulty::Normal, Difficulty::Hard];

  pub fn label(&self) -> &'static str {
    match self {
      Difficulty::Basic => "기초",
      Difficulty::Normal => "보통",
      Difficulty::Hard => "어려움",
    }
  }
}

/// Passage topic, single-select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
  #[serde(rename = "과학기술")]
  Science,
  #[serde(rename = "인문")]
  Humanities,
  #[serde(rename = "사회")]
  Society,
  #[serde(rename = "예술/문화")]
  ArtsCulture,
  #[serde(rename = "시사")]
  CurrentAffairs,
}

impl Topic {
  pub const ALL: [Topic; 5] = [
    Topic::Science,
    Topic::Humanities,
    Topic::Society,
    Topic::ArtsCulture,
    Topic::CurrentAffairs,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      Topic::Science => "과학기술",
      Topic::Humanities => "인문",
      Topic::Society => "사회",
      Topic::ArtsCulture => "예술/문화",
      Topic::CurrentAffairs => "시사",
    }
  }
}

/// Exercise type. Exactly one is active; it is the sole key deciding which
/// screen a generation response routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureMode {
  /// "실제 문제 풀이" in the UI; the backend matches the analysis label.
  #[serde(rename = "선지 분석 & 논리 평가")]
  ProblemSolving,
  /// "지문의 핵심 파악하기" in the UI.
  #[serde(rename = "지문요약 핵심파악")]
  CoreComprehension,
}

impl FeatureMode {
  pub const ALL: [FeatureMode; 2] = [FeatureMode::ProblemSolving, FeatureMode::CoreComprehension];

  pub fn label(&self) -> &'static str {
    match self {
      FeatureMode::ProblemSolving => "실제 문제 풀이",
      FeatureMode::CoreComprehension => "지문의 핵심 파악하기",
    }
  }
}

pub const MIN_PASSAGE_LENGTH: u32 = 800;
pub const MAX_PASSAGE_LENGTH: u32 = 1200;

/// The four generation parameters collected on the settings screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassageConfig {
  pub difficulty: Difficulty,
  pub topic: Topic,
  pub features: FeatureMode,
  passage_length: u32,
}

impl Default for PassageConfig {
  fn default() -> Self {
    Self {
      difficulty: Difficulty::Hard,
      topic: Topic::Science,
      features: FeatureMode::CoreComprehension,
      passage_length: 1000,
    }
  }
}

impl PassageConfig {
  pub fn passage_length(&self) -> u32 {
    self.passage_length
  }

  /// Slider semantics: out-of-range values are clamped, not rejected.
  pub fn set_passage_length(&mut self, length: u32) {
    self.passage_length = length.clamp(MIN_PASSAGE_LENGTH, MAX_PASSAGE_LENGTH);
  }
}

/// Fixed numeral labels zipped with choices by position.
pub const CHOICE_LABELS: [&str; 5] = ["①", "②", "③", "④", "⑤"];

/// A passage as returned by the generation endpoint. For quiz mode `choices`
/// carries the five options; for summary mode it is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPassage {
  pub title: Option<String>,
  pub passage: String,
  pub choices: Vec<String>,
}

impl GeneratedPassage {
  /// Choices paired with ①–⑤ by position for display.
  pub fn labeled_choices(&self) -> Vec<(&'static str, &str)> {
    self
      .choices
      .iter()
      .enumerate()
      .map(|(i, c)| (CHOICE_LABELS.get(i).copied().unwrap_or("·"), c.as_str()))
      .collect()
  }
}

/// What the dispatcher stores for the next screen to pick up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExercisePayload {
  Quiz(GeneratedPassage),
  Summary(GeneratedPassage),
}

impl ExercisePayload {
  /// Defined "data unavailable" state for direct navigation without a prior
  /// generation step. The screen stays navigable; with zero choices no answer
  /// can be selected, so quiz submission remains disabled.
  pub fn fallback(mode: FeatureMode) -> Self {
    let passage = GeneratedPassage {
      title: Some("자료 없음".into()),
      passage: "지문 데이터를 불러오지 못했습니다. 지문 설정에서 새 지문을 생성해 주세요.".into(),
      choices: Vec::new(),
    };
    match mode {
      FeatureMode::ProblemSolving => ExercisePayload::Quiz(passage),
      FeatureMode::CoreComprehension => ExercisePayload::Summary(passage),
    }
  }

  pub fn passage(&self) -> &GeneratedPassage {
    match self {
      ExercisePayload::Quiz(p) | ExercisePayload::Summary(p) => p,
    }
  }
}

/// The completed quiz answer set handed to the analysis presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizAnswers {
  /// 1-based choice index.
  pub selected_choice: usize,
  pub justifications: Vec<String>,
}

/// One score card on the analysis screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCard {
  pub label: &'static str,
  pub percent: u8,
}

/// Per-option feedback row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionFeedback {
  pub number: usize,
  pub analysis: String,
  pub verdict: String,
}

/// Read-only analysis output. The only user mutation is expand/collapse,
/// which lives on the screen, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
  pub headline: String,
  pub scores: Vec<ScoreCard>,
  pub options: Vec<OptionFeedback>,
}

/// One labeled row of the 상세 피드백 box (강점/약점/개선점).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackItem {
  pub label: &'static str,
  pub text: String,
}

/// Analysis output for the summary flow: progress-bar scores, detailed
/// feedback, and the coaching sections. Served/fixed for this build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryReport {
  pub scores: Vec<ScoreCard>,
  pub feedback: Vec<FeedbackItem>,
  pub improvement_points: String,
  pub model_summary: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn passage_length_clamps_to_slider_range() {
    let mut cfg = PassageConfig::default();
    cfg.set_passage_length(100);
    assert_eq!(cfg.passage_length(), MIN_PASSAGE_LENGTH);
    cfg.set_passage_length(5000);
    assert_eq!(cfg.passage_length(), MAX_PASSAGE_LENGTH);
    cfg.set_passage_length(950);
    assert_eq!(cfg.passage_length(), 950);
  }

  #[test]
  fn feature_mode_serializes_to_backend_labels() {
    assert_eq!(
      serde_json::to_string(&FeatureMode::ProblemSolving).unwrap(),
      "\"선지 분석 & 논리 평가\""
    );
    assert_eq!(
      serde_json::to_string(&FeatureMode::CoreComprehension).unwrap(),
      "\"지문요약 핵심파악\""
    );
    assert_eq!(serde_json::to_string(&Difficulty::Basic).unwrap(), "\"기초\"");
    assert_eq!(serde_json::to_string(&Topic::ArtsCulture).unwrap(), "\"예술/문화\"");
  }

  #[test]
  fn labeled_choices_zip_by_position() {
    let p = GeneratedPassage {
      title: None,
      passage: "본문".into(),
      choices: vec!["가".into(), "나".into(), "다".into()],
    };
    let labeled = p.labeled_choices();
    assert_eq!(labeled[0], ("①", "가"));
    assert_eq!(labeled[2], ("③", "다"));
  }

  #[test]
  fn fallback_has_no_selectable_choices() {
    let payload = ExercisePayload::fallback(FeatureMode::ProblemSolving);
    assert!(payload.passage().choices.is_empty());
    assert!(!payload.passage().passage.is_empty());
  }
}
