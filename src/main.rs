//! Haeksim · 독해 훈련 클라이언트
//!
//! - Terminal front end over the session flow (auth → 지문 설정 → 문제 풀이 /
//!   요약 연습 → 학습 분석)
//! - Real HTTP backend when an API endpoint is configured, deterministic
//!   scripted backend otherwise
//! - Chat overlay available from the dashboard
//!
//! Important env variables:
//!   HAEKSIM_API_URL     : API base URL; absent -> scripted backend
//!   HAEKSIM_CONFIG_PATH : path to TOML config (timeout, login encoding, ...)
//!   HAEKSIM_TOKEN_PATH  : token file (default ".haeksim_token.json")
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod telemetry;
mod errors;
mod domain;
mod config;
mod protocol;
mod seeds;
mod session;
mod nav;
mod backend;
mod flow;

use std::io::Write as _;

use tracing::{info, instrument};

use crate::backend::{Backend, HttpBackend, ScriptedBackend};
use crate::config::AppConfig;
use crate::domain::{Difficulty, FeatureMode, Topic};
use crate::flow::auth::{LoginScreen, SignupScreen};
use crate::flow::chat::ChatOverlay;
use crate::flow::quiz::QuizScreen;
use crate::flow::results::{AnalysisScreen, SummaryAnalysisScreen};
use crate::flow::settings::SettingsScreen;
use crate::flow::summary::SummaryScreen;
use crate::nav::{Nav, Route};
use crate::session::{Session, TokenStore};

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = AppConfig::load_from_env();
  let backend: Box<dyn Backend> = match HttpBackend::from_config(&cfg) {
    Some(http) => {
      info!(target: "haeksim", "Using HTTP backend");
      Box::new(http)
    }
    None => {
      info!(target: "haeksim", "No API endpoint configured; using scripted backend");
      Box::new(ScriptedBackend::new())
    }
  };

  let mut session = Session::new(TokenStore::new(cfg.token_path.clone()));
  let mut nav = Nav::new();
  let mut chat = ChatOverlay::new();

  loop {
    match nav.current() {
      Route::Home => {
        println!("\n=== Haeksim 독해 훈련 ===");
        match prompt("[1] 로그인  [2] 회원가입  [/경로] 바로가기  [q] 종료")?.as_str() {
          "1" => nav.push(Route::Login),
          "2" => nav.push(Route::SignUp),
          "q" => break,
          // Deep link; exercise screens without a payload degrade to the
          // fallback passage instead of failing.
          other => {
            if let Some(route) = Route::from_path(other) {
              nav.push(route);
            }
          }
        }
      }
      Route::Login => run_login(backend.as_ref(), &mut session, &mut nav).await?,
      Route::SignUp => run_signup(backend.as_ref(), &mut nav).await?,
      Route::Dashboard => {
        if !run_dashboard(&mut session, &mut nav, &mut chat).await? {
          break;
        }
      }
      Route::PassageSettings => run_settings(backend.as_ref(), &mut session, &mut nav).await?,
      Route::QuizPage => run_quiz(&mut session, &mut nav, &mut chat).await?,
      Route::SummaryPractice => run_summary(&mut session, &mut nav, &mut chat).await?,
      Route::QuizResults => run_quiz_results(&session, &mut nav, &mut chat).await?,
      Route::LearningAnalysis => run_learning_analysis(&session, &mut nav, &mut chat).await?,
    }
  }

  info!(target: "haeksim", "Session ended");
  Ok(())
}

fn prompt(label: &str) -> std::io::Result<String> {
  print!("{} > ", label);
  std::io::stdout().flush()?;
  let mut line = String::new();
  std::io::stdin().read_line(&mut line)?;
  Ok(line.trim().to_string())
}

async fn run_login(
  backend: &dyn Backend,
  session: &mut Session,
  nav: &mut Nav,
) -> std::io::Result<()> {
  println!("\n--- 로그인 ---");
  let mut screen = LoginScreen::new();
  screen.username = prompt("아이디")?;
  screen.password = prompt("비밀번호")?;

  match screen.submit(backend, session).await {
    Some(route) => nav.push(route),
    None => {
      if let Some(e) = &screen.error {
        println!("{}", e);
      }
      if prompt("[r] 다시 시도  [b] 뒤로")?.as_str() == "b" {
        nav.go_back();
      }
    }
  }
  Ok(())
}

async fn run_signup(backend: &dyn Backend, nav: &mut Nav) -> std::io::Result<()> {
  println!("\n--- 회원가입 ---");
  let mut screen = SignupScreen::new();
  screen.username = prompt("아이디")?;
  screen.email = prompt("이메일")?;
  screen.password = prompt("비밀번호")?;
  screen.confirm_password = prompt("비밀번호 확인")?;

  match screen.submit(backend).await {
    Some(success) => {
      println!("{}", success.message);
      // Cosmetic redirect timer; only the driver sleeps.
      tokio::time::sleep(success.delay).await;
      nav.replace(success.redirect);
    }
    None => {
      if let Some(e) = &screen.error {
        println!("{}", e);
      }
      if prompt("[r] 다시 시도  [b] 뒤로")?.as_str() == "b" {
        nav.go_back();
      }
    }
  }
  Ok(())
}

async fn run_dashboard(
  session: &mut Session,
  nav: &mut Nav,
  chat: &mut ChatOverlay,
) -> std::io::Result<bool> {
  println!("\n--- 대시보드 ---");
  match prompt("[1] 지문 설정  [c] 채팅  [l] 로그아웃  [q] 종료")?.as_str() {
    "1" => nav.push(Route::PassageSettings),
    "c" => run_chat(chat).await?,
    "l" => {
      session.logout();
      nav.replace(Route::Home);
    }
    "q" => return Ok(false),
    _ => {}
  }
  Ok(true)
}

async fn run_chat(chat: &mut ChatOverlay) -> std::io::Result<()> {
  chat.open();
  loop {
    for m in chat.messages() {
      println!("{:?}: {}", m.sender, m.text);
    }
    let input = prompt("메시지 ([x] 닫기)")?;
    if input == "x" {
      chat.close();
      return Ok(());
    }
    match chat.send(&input) {
      Ok(pending) => {
        tokio::time::sleep(pending.delay).await;
        chat.deliver(pending);
      }
      Err(e) => println!("{}", e),
    }
  }
}

async fn run_settings(
  backend: &dyn Backend,
  session: &mut Session,
  nav: &mut Nav,
) -> std::io::Result<()> {
  println!("\n--- 지문 설정 ---");
  let mut screen = SettingsScreen::new();

  if let Some(d) = pick("난이도", &Difficulty::ALL, Difficulty::label)? {
    screen.select_difficulty(d);
  }
  if let Some(t) = pick("주제", &Topic::ALL, Topic::label)? {
    screen.select_topic(t);
  }
  if let Some(f) = pick("기능", &FeatureMode::ALL, FeatureMode::label)? {
    screen.select_features(f);
  }
  if let Ok(len) = prompt("지문 길이 (800-1200)")?.parse::<u32>() {
    screen.set_passage_length(len);
  }

  match prompt("[g] 생성 시작  [b] 뒤로")?.as_str() {
    "g" => match screen.request_generation(backend, session).await {
      Some(route) => nav.push(route),
      None => {
        if let Some(e) = &screen.error {
          println!("{}", e);
        }
      }
    },
    "b" => {
      screen.leave();
      nav.go_back();
    }
    _ => {}
  }
  Ok(())
}

/// Single-select over a labeled enum; empty input keeps the default.
fn pick<T: Copy>(label: &str, all: &[T], name: fn(&T) -> &'static str) -> std::io::Result<Option<T>> {
  let menu: Vec<String> =
    all.iter().enumerate().map(|(i, v)| format!("[{}] {}", i + 1, name(v))).collect();
  let input = prompt(&format!("{}: {}", label, menu.join("  ")))?;
  let choice = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
  Ok(choice.and_then(|i| all.get(i).copied()))
}

async fn run_quiz(
  session: &mut Session,
  nav: &mut Nav,
  chat: &mut ChatOverlay,
) -> std::io::Result<()> {
  let mut screen = QuizScreen::from_session(session);
  loop {
    let passage = screen.passage();
    if let Some(title) = &passage.title {
      println!("\n## {}", title);
    }
    println!("{}\n", passage.passage);
    for (label, choice) in passage.labeled_choices() {
      println!("  {} {}", label, choice);
    }
    let (answered, total) = screen.progress();
    println!("진행 {}/{} · 총 {}자", answered, total, screen.char_count());

    match prompt("[1-5] 선택  [j] 근거 작성  [s] 제출  [r] 새로 풀기  [c] 채팅  [b] 뒤로")?.as_str() {
      "c" => run_chat(chat).await?,
      "j" => {
        if let Ok(i) = prompt("몇 번 선지의 근거?")?.parse::<usize>() {
          if i >= 1 {
            let text = prompt("근거")?;
            screen.edit_justification(i - 1, text);
          }
        }
      }
      "s" => {
        if let Some(route) = screen.submit(session) {
          nav.push(route);
          return Ok(());
        }
        if let Some(notice) = &screen.notice {
          println!("{}", notice);
        }
      }
      "r" => screen.reset(),
      "b" => {
        // Back discards the in-progress answers.
        nav.go_back();
        return Ok(());
      }
      other => {
        if let Ok(n) = other.parse::<usize>() {
          screen.select_choice(n);
        }
      }
    }
  }
}

async fn run_summary(
  session: &mut Session,
  nav: &mut Nav,
  chat: &mut ChatOverlay,
) -> std::io::Result<()> {
  let mut screen = SummaryScreen::from_session(session);
  loop {
    let passage = screen.passage();
    if let Some(title) = &passage.title {
      println!("\n## {} (글자 크기 {})", title, screen.font_size());
    }
    println!("{}\n", passage.passage);
    println!("요약 ({}자): {}", screen.char_count(), screen.text());

    match prompt("[e] 요약 작성  [+/-] 글자 크기  [s] 제출  [c] 채팅  [b] 뒤로")?.as_str() {
      "c" => run_chat(chat).await?,
      "e" => {
        let text = prompt("요약")?;
        screen.set_text(&text);
      }
      "+" => screen.increase_font(),
      "-" => screen.decrease_font(),
      "s" => {
        let route = screen.submit(session);
        nav.push(route);
        return Ok(());
      }
      "b" => {
        nav.go_back();
        return Ok(());
      }
      _ => {}
    }
  }
}

async fn run_quiz_results(
  session: &Session,
  nav: &mut Nav,
  chat: &mut ChatOverlay,
) -> std::io::Result<()> {
  let mut screen = AnalysisScreen::from_session(session);
  loop {
    let report = screen.report();
    println!("\n--- 문제 풀이 분석 ---");
    println!("{}", report.headline);
    for score in &report.scores {
      println!("  {} {}%", score.label, score.percent);
    }
    for option in &report.options {
      println!("  [{}] {}", option.number, option.verdict);
      if screen.expanded() == Some(option.number) {
        println!("      {}", option.analysis);
      }
    }

    match prompt("[1-5] 선지 펼치기  [s] 저장하기  [c] 채팅  [r] 다시 풀기")?.as_str() {
      "c" => run_chat(chat).await?,
      "s" => {
        screen.save(nav);
        return Ok(());
      }
      "r" => {
        screen.retry(nav);
        return Ok(());
      }
      other => {
        if let Ok(n) = other.parse::<usize>() {
          screen.toggle_option(n);
        }
      }
    }
  }
}

fn bar(percent: u8) -> String {
  let filled = usize::from(percent / 10);
  format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

async fn run_learning_analysis(
  session: &Session,
  nav: &mut Nav,
  chat: &mut ChatOverlay,
) -> std::io::Result<()> {
  let screen = SummaryAnalysisScreen::from_session(session);
  loop {
    let report = screen.report();
    println!("\n--- 학습 분석 결과 ---");
    if let Some(summary) = screen.submitted() {
      println!("작성한 요약: {}", summary);
    }
    println!("AI 분석 점수");
    for score in &report.scores {
      println!("  {:<8} {} {}%", score.label, bar(score.percent), score.percent);
    }
    println!("상세 피드백");
    for item in &report.feedback {
      println!("  {}: {}", item.label, item.text);
    }
    println!("개선 포인트\n  {}", report.improvement_points);
    println!("모범 요약 예시\n  {}", report.model_summary);

    match prompt("[s] 저장  [c] 채팅  [r] 다시 하기")?.as_str() {
      "c" => run_chat(chat).await?,
      "s" => {
        screen.save(nav);
        return Ok(());
      }
      "r" => {
        screen.retry(nav);
        return Ok(());
      }
      _ => {}
    }
  }
}
