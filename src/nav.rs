//! Client-side route table and navigation history.
//!
//! Paths are the external contract for deep-linking and back-navigation.
//! Generation payloads are NOT carried in the path; they live in the session
//! store, and a deep link to an exercise screen degrades to the fallback
//! payload instead of crashing.

use tracing::{debug, instrument};

/// The nine navigable screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
  Home,
  Login,
  SignUp,
  Dashboard,
  PassageSettings,
  QuizPage,
  SummaryPractice,
  QuizResults,
  LearningAnalysis,
}

impl Route {
  pub fn path(&self) -> &'static str {
    match self {
      Route::Home => "/",
      Route::Login => "/page1",
      Route::SignUp => "/sign-up",
      Route::Dashboard => "/dashboard",
      Route::PassageSettings => "/passage-settings",
      Route::QuizPage => "/quiz-page",
      Route::SummaryPractice => "/summary-practice",
      Route::QuizResults => "/quiz-results",
      Route::LearningAnalysis => "/learning-analysis",
    }
  }

  pub fn from_path(path: &str) -> Option<Route> {
    match path {
      "/" => Some(Route::Home),
      "/page1" => Some(Route::Login),
      "/sign-up" => Some(Route::SignUp),
      "/dashboard" => Some(Route::Dashboard),
      "/passage-settings" => Some(Route::PassageSettings),
      "/quiz-page" => Some(Route::QuizPage),
      "/summary-practice" => Some(Route::SummaryPractice),
      "/quiz-results" => Some(Route::QuizResults),
      "/learning-analysis" => Some(Route::LearningAnalysis),
      _ => None,
    }
  }
}

/// History stack. `go_back` is the `-1` navigation every screen's 뒤로가기
/// button performs; at the bottom of the stack it stays put.
#[derive(Debug)]
pub struct Nav {
  stack: Vec<Route>,
}

impl Nav {
  pub fn new() -> Self {
    Self { stack: vec![Route::Home] }
  }

  pub fn current(&self) -> Route {
    *self.stack.last().unwrap_or(&Route::Home)
  }

  #[instrument(level = "debug", skip(self))]
  pub fn push(&mut self, route: Route) {
    debug!(target: "flow", from = self.current().path(), to = route.path(), "navigate");
    self.stack.push(route);
  }

  /// Replace the current entry (used when a flow ends and should not be
  /// re-entered via back, e.g. 저장 returning to the dashboard).
  pub fn replace(&mut self, route: Route) {
    self.stack.pop();
    self.stack.push(route);
  }

  #[instrument(level = "debug", skip(self))]
  pub fn go_back(&mut self) -> Route {
    if self.stack.len() > 1 {
      self.stack.pop();
    }
    self.current()
  }
}

impl Default for Nav {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_round_trip() {
    for route in [
      Route::Home,
      Route::Login,
      Route::SignUp,
      Route::Dashboard,
      Route::PassageSettings,
      Route::QuizPage,
      Route::SummaryPractice,
      Route::QuizResults,
      Route::LearningAnalysis,
    ] {
      assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/nope"), None);
  }

  #[test]
  fn back_stops_at_stack_bottom() {
    let mut nav = Nav::new();
    nav.push(Route::Login);
    nav.push(Route::Dashboard);
    assert_eq!(nav.go_back(), Route::Login);
    assert_eq!(nav.go_back(), Route::Home);
    assert_eq!(nav.go_back(), Route::Home);
  }

  #[test]
  fn replace_swaps_without_growing_history() {
    let mut nav = Nav::new();
    nav.push(Route::QuizResults);
    nav.replace(Route::Dashboard);
    assert_eq!(nav.current(), Route::Dashboard);
    assert_eq!(nav.go_back(), Route::Home);
  }
}
