//! Chat overlay: a toggleable message panel seeded with a greeting.
//!
//! `send` appends the student's message immediately and hands back a pending
//! tutor reply with its cosmetic delay; the driver sleeps, tests deliver
//! directly. Closing the overlay destroys the transcript; reopening reseeds
//! the greeting.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::errors::ChatError;

pub const GREETING: &str = "안녕하세요, 무엇을 도와드릴까요?";
pub const CANNED_REPLY: &str = "잠시만요...";
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
  AiTutor,
  Student,
}

impl Sender {
  /// Avatar asset shown next to the bubble; one image per sender.
  pub fn avatar(&self) -> &'static str {
    match self {
      Sender::AiTutor => "assets/ai-avatar.jpg",
      Sender::Student => "assets/student-avatar.jpg",
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
  pub sender: Sender,
  pub text: String,
  pub avatar: &'static str,
}

impl ChatMessage {
  fn new(sender: Sender, text: impl Into<String>) -> Self {
    Self { sender, text: text.into(), avatar: sender.avatar() }
  }
}

/// A reply the overlay owes the transcript after its delay elapses.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingReply {
  pub text: &'static str,
  pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct ChatOverlay {
  open: bool,
  messages: Vec<ChatMessage>,
}

impl ChatOverlay {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn messages(&self) -> &[ChatMessage] {
    &self.messages
  }

  pub fn open(&mut self) {
    if self.open {
      return;
    }
    self.open = true;
    self.messages = vec![ChatMessage::new(Sender::AiTutor, GREETING)];
    debug!(target: "flow", "Chat opened");
  }

  /// Closing destroys the transcript; reopening starts fresh.
  pub fn close(&mut self) {
    self.open = false;
    self.messages.clear();
    debug!(target: "flow", "Chat closed");
  }

  pub fn toggle(&mut self) {
    if self.open {
      self.close();
    } else {
      self.open();
    }
  }

  /// Append the student's message and owe a canned tutor reply. Blank input
  /// is rejected and nothing is appended.
  #[instrument(level = "debug", skip_all, fields(chars = input.chars().count()))]
  pub fn send(&mut self, input: &str) -> Result<PendingReply, ChatError> {
    if input.trim().is_empty() {
      return Err(ChatError::EmptyMessage);
    }
    self.messages.push(ChatMessage::new(Sender::Student, input));
    Ok(PendingReply { text: CANNED_REPLY, delay: REPLY_DELAY })
  }

  /// Resolve a pending reply into the transcript. A reply for a closed
  /// overlay is dropped, matching the destroyed transcript.
  pub fn deliver(&mut self, reply: PendingReply) {
    if !self.open {
      return;
    }
    self.messages.push(ChatMessage::new(Sender::AiTutor, reply.text));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opening_seeds_the_greeting() {
    let mut chat = ChatOverlay::new();
    assert!(chat.messages().is_empty());

    chat.open();
    assert!(chat.is_open());
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].sender, Sender::AiTutor);
    assert_eq!(chat.messages()[0].text, GREETING);
    assert_eq!(chat.messages()[0].avatar, Sender::AiTutor.avatar());

    // Re-opening an open overlay does not duplicate the greeting.
    chat.open();
    assert_eq!(chat.messages().len(), 1);
  }

  #[test]
  fn blank_input_is_rejected_without_appending() {
    let mut chat = ChatOverlay::new();
    chat.open();

    assert_eq!(chat.send("   "), Err(ChatError::EmptyMessage));
    assert_eq!(chat.send(""), Err(ChatError::EmptyMessage));
    assert_eq!(chat.messages().len(), 1);
  }

  #[test]
  fn send_appends_immediately_and_defers_the_reply() {
    let mut chat = ChatOverlay::new();
    chat.open();

    let pending = chat.send("이 지문이 어렵습니다").expect("pending reply");
    assert_eq!(pending.delay, REPLY_DELAY);
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].sender, Sender::Student);
    assert_eq!(chat.messages()[1].avatar, Sender::Student.avatar());

    chat.deliver(pending);
    assert_eq!(chat.messages().len(), 3);
    assert_eq!(chat.messages()[2].text, CANNED_REPLY);
  }

  #[test]
  fn closing_destroys_history_and_reopening_reseeds() {
    let mut chat = ChatOverlay::new();
    chat.toggle();
    chat.send("질문").expect("pending reply");
    assert_eq!(chat.messages().len(), 2);

    chat.toggle();
    assert!(!chat.is_open());
    assert!(chat.messages().is_empty());

    chat.toggle();
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].text, GREETING);
  }

  #[test]
  fn reply_for_a_closed_overlay_is_dropped() {
    let mut chat = ChatOverlay::new();
    chat.open();
    let pending = chat.send("질문").expect("pending reply");
    chat.close();
    chat.deliver(pending);
    assert!(chat.messages().is_empty());
  }
}
