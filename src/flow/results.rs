//! Result/analysis presenters, one per exercise flow.
//!
//! The quiz report pairs score cards with per-option rows; its single user
//! mutation is which option row is expanded (at most one at a time). The
//! summary report is a different shape: progress-bar scores, a 강점/약점/개선점
//! feedback box, and the coaching sections, with no expandable rows at all.
//! Both screens share `save` (end of session, return home, no persistence
//! call) and `retry` (back one step in history, re-attempt the exercise).

use tracing::{info, instrument};

use crate::domain::{
  AnalysisReport, FeedbackItem, OptionFeedback, QuizAnswers, ScoreCard, SummaryReport,
};
use crate::nav::{Nav, Route};
use crate::session::Session;

pub const ANALYSIS_HEADLINE: &str = "글을 읽고 이해하는 능력을 향상시키는 것이 중요하다.";

pub const CORRECT_VERDICT: &str = "정답";
pub const INCORRECT_VERDICT: &str = "오답";

/// Fixed score set for this build; a served score set would slot in here.
const SCORES: [ScoreCard; 4] = [
  ScoreCard { label: "정답 정확도", percent: 80 },
  ScoreCard { label: "과거 논리성", percent: 70 },
  ScoreCard { label: "오답 분석력", percent: 60 },
  ScoreCard { label: "종합 사고력", percent: 70 },
];

#[derive(Debug)]
pub struct AnalysisScreen {
  report: AnalysisReport,
  /// 1-based option number, mirroring `OptionFeedback::number`.
  expanded: Option<usize>,
}

impl AnalysisScreen {
  /// Build the report from the submitted answer set. Without answers (deep
  /// link straight to the analysis page) the option list is empty and only
  /// the score cards render.
  pub fn from_session(session: &Session) -> Self {
    let options = match session.answers() {
      Some(answers) => option_rows(answers),
      None => Vec::new(),
    };
    let report = AnalysisReport {
      headline: ANALYSIS_HEADLINE.to_string(),
      scores: SCORES.to_vec(),
      options,
    };
    Self { report, expanded: None }
  }

  pub fn report(&self) -> &AnalysisReport {
    &self.report
  }

  pub fn expanded(&self) -> Option<usize> {
    self.expanded
  }

  /// Expand row `number`, collapsing whichever was open; a second toggle on
  /// the same row collapses it.
  pub fn toggle_option(&mut self, number: usize) {
    if self.report.options.iter().all(|o| o.number != number) {
      return;
    }
    self.expanded = if self.expanded == Some(number) { None } else { Some(number) };
  }

  /// 저장하기: end of session, return home. No persistence call is made, and
  /// the analysis page is replaced so back cannot re-enter the ended flow.
  #[instrument(level = "info", skip_all)]
  pub fn save(&self, nav: &mut Nav) -> Route {
    info!(target: "flow", "Analysis saved; returning to dashboard");
    nav.replace(Route::Dashboard);
    Route::Dashboard
  }

  /// 다시 풀기: back one step in history, to the exercise screen.
  pub fn retry(&self, nav: &mut Nav) -> Route {
    nav.go_back();
    nav.current()
  }
}

/// Served score set for the summary flow; rendered as progress bars.
const SUMMARY_SCORES: [ScoreCard; 3] = [
  ScoreCard { label: "완성도", percent: 85 },
  ScoreCard { label: "논리성", percent: 70 },
  ScoreCard { label: "핵심어 정확도", percent: 90 },
];

const IMPROVEMENT_POINTS: &str = "To improve your non-fiction reading comprehension, focus on \
identifying the core arguments and supporting evidence in the text. Practice summarizing complex \
information in a clear and concise manner, emphasizing the logical connections between ideas.";

const MODEL_SUMMARY: &str = "The text discusses the impact of climate change on global ecosystems, \
highlighting the importance of sustainable practices to mitigate its effects. It emphasizes the \
need for international cooperation and individual responsibility in addressing this critical \
issue.";

/// Analysis screen for the summary flow (학습 분석 결과).
#[derive(Debug)]
pub struct SummaryAnalysisScreen {
  report: SummaryReport,
  submitted: Option<String>,
}

impl SummaryAnalysisScreen {
  pub fn from_session(session: &Session) -> Self {
    let submitted = session.summary().map(str::to_string);
    let report = SummaryReport {
      scores: SUMMARY_SCORES.to_vec(),
      feedback: detailed_feedback(submitted.as_deref()),
      improvement_points: IMPROVEMENT_POINTS.to_string(),
      model_summary: MODEL_SUMMARY.to_string(),
    };
    Self { report, submitted }
  }

  pub fn report(&self) -> &SummaryReport {
    &self.report
  }

  /// The summary the student handed in, shown above the feedback box.
  pub fn submitted(&self) -> Option<&str> {
    self.submitted.as_deref()
  }

  /// 저장: end of session, return home; the analysis page is replaced so
  /// back cannot re-enter the ended flow.
  #[instrument(level = "info", skip_all)]
  pub fn save(&self, nav: &mut Nav) -> Route {
    info!(target: "flow", "Summary analysis saved; returning to dashboard");
    nav.replace(Route::Dashboard);
    Route::Dashboard
  }

  /// 다시 하기: back one step in history, to the summary practice screen.
  pub fn retry(&self, nav: &mut Nav) -> Route {
    nav.go_back();
    nav.current()
  }
}

fn detailed_feedback(submitted: Option<&str>) -> Vec<FeedbackItem> {
  match submitted {
    Some(text) if !text.trim().is_empty() => vec![
      FeedbackItem {
        label: "강점",
        text: "지문의 중심 화제를 놓치지 않고 요약에 담았습니다.".into(),
      },
      FeedbackItem {
        label: "약점",
        text: "근거와 결론의 연결이 드러나도록 문장을 잇는 연습이 필요합니다.".into(),
      },
      FeedbackItem {
        label: "개선점",
        text: format!(
          "{}자로 작성했습니다. 핵심어를 중심으로 문장을 더 간결하게 다듬어 보세요.",
          text.chars().count()
        ),
      },
    ],
    _ => vec![FeedbackItem {
      label: "개선점",
      text: "작성된 요약이 없습니다. 요약 연습에서 지문을 한 단락으로 정리해 보세요.".into(),
    }],
  }
}

fn option_rows(answers: &QuizAnswers) -> Vec<OptionFeedback> {
  answers
    .justifications
    .iter()
    .enumerate()
    .map(|(i, justification)| {
      let number = i + 1;
      let verdict =
        if number == answers.selected_choice { CORRECT_VERDICT } else { INCORRECT_VERDICT };
      OptionFeedback {
        number,
        analysis: format!("작성한 근거: {}", justification),
        verdict: verdict.to_string(),
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::TokenStore;

  fn answered_session() -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new(TokenStore::new(dir.path().join("token.json")));
    session.put_answers(QuizAnswers {
      selected_choice: 2,
      justifications: vec!["하나".into(), "둘".into(), "셋".into()],
    });
    (dir, session)
  }

  #[test]
  fn at_most_one_option_is_expanded() {
    let (_dir, session) = answered_session();
    let mut screen = AnalysisScreen::from_session(&session);
    assert_eq!(screen.expanded(), None);

    screen.toggle_option(1);
    assert_eq!(screen.expanded(), Some(1));

    // Expanding another row collapses the first.
    screen.toggle_option(3);
    assert_eq!(screen.expanded(), Some(3));

    // Toggling the open row collapses it.
    screen.toggle_option(3);
    assert_eq!(screen.expanded(), None);

    // Unknown rows are ignored.
    screen.toggle_option(99);
    assert_eq!(screen.expanded(), None);
  }

  #[test]
  fn selected_choice_is_marked_correct() {
    let (_dir, session) = answered_session();
    let screen = AnalysisScreen::from_session(&session);
    let options = &screen.report().options;
    assert_eq!(options.len(), 3);
    assert_eq!(options[1].verdict, CORRECT_VERDICT);
    assert_eq!(options[0].verdict, INCORRECT_VERDICT);
    assert!(options[0].analysis.contains("하나"));
  }

  #[test]
  fn scores_are_the_fixed_set() {
    let (_dir, session) = answered_session();
    let screen = AnalysisScreen::from_session(&session);
    let scores = &screen.report().scores;
    assert_eq!(scores.len(), 4);
    assert_eq!(scores[0], ScoreCard { label: "정답 정확도", percent: 80 });
    assert_eq!(scores[3], ScoreCard { label: "종합 사고력", percent: 70 });
  }

  #[test]
  fn deep_link_without_answers_renders_scores_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = Session::new(TokenStore::new(dir.path().join("token.json")));
    let screen = AnalysisScreen::from_session(&session);
    assert!(screen.report().options.is_empty());
    assert_eq!(screen.report().scores.len(), 4);
  }

  #[test]
  fn summary_analysis_has_its_own_report_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new(TokenStore::new(dir.path().join("token.json")));
    session.put_summary("기후 변화 대응에는 국제 협력이 필요하다.".into());

    let screen = SummaryAnalysisScreen::from_session(&session);
    let report = screen.report();
    assert_eq!(report.scores.len(), 3);
    assert_eq!(report.scores[0], ScoreCard { label: "완성도", percent: 85 });
    assert_eq!(report.scores[2], ScoreCard { label: "핵심어 정확도", percent: 90 });

    let labels: Vec<_> = report.feedback.iter().map(|f| f.label).collect();
    assert_eq!(labels, ["강점", "약점", "개선점"]);
    assert!(!report.improvement_points.is_empty());
    assert!(!report.model_summary.is_empty());
    assert_eq!(screen.submitted(), Some("기후 변화 대응에는 국제 협력이 필요하다."));
  }

  #[test]
  fn summary_analysis_without_a_draft_still_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = Session::new(TokenStore::new(dir.path().join("token.json")));
    let screen = SummaryAnalysisScreen::from_session(&session);

    assert!(screen.submitted().is_none());
    assert_eq!(screen.report().feedback.len(), 1);
    assert_eq!(screen.report().feedback[0].label, "개선점");
  }

  #[test]
  fn summary_analysis_save_and_retry_navigate_like_the_quiz_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = Session::new(TokenStore::new(dir.path().join("token.json")));
    let screen = SummaryAnalysisScreen::from_session(&session);

    let mut nav = Nav::new();
    nav.push(Route::SummaryPractice);
    nav.push(Route::LearningAnalysis);
    assert_eq!(screen.retry(&mut nav), Route::SummaryPractice);

    nav.push(Route::LearningAnalysis);
    assert_eq!(screen.save(&mut nav), Route::Dashboard);
    assert_eq!(nav.go_back(), Route::SummaryPractice);
  }

  #[test]
  fn save_routes_home_and_retry_walks_back() {
    let (_dir, session) = answered_session();
    let screen = AnalysisScreen::from_session(&session);

    let mut nav = Nav::new();
    nav.push(Route::QuizPage);
    nav.push(Route::QuizResults);
    assert_eq!(screen.retry(&mut nav), Route::QuizPage);

    nav.push(Route::QuizResults);
    assert_eq!(screen.save(&mut nav), Route::Dashboard);
    assert_eq!(nav.current(), Route::Dashboard);
    // back from the dashboard skips the replaced analysis page
    assert_eq!(nav.go_back(), Route::QuizPage);
  }
}
