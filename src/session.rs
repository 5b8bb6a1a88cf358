//! Application session: the persisted bearer token and the transition payload
//! written by the generation dispatcher for the next screen.
//!
//! This replaces two pieces of hidden state in earlier builds:
//!   - the ambient token a request interceptor read behind the scenes
//!   - the generation response smuggled through router transition state
//!
//! Everything that needs either now takes the session explicitly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domain::{ExercisePayload, FeatureMode, QuizAnswers};

/// On-disk shape of the token file. One key, per the storage contract.
#[derive(Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Durable token storage. No expiry check is performed client-side; the
/// token lives until logout or the next login overwrites it.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredToken>(&raw) {
            Ok(stored) => Some(stored.access_token),
            Err(e) => {
                warn!(target: "haeksim", path = %self.path.display(), error = %e, "Token file unreadable; ignoring");
                None
            }
        }
    }

    pub fn save(&self, token: &str) {
        let stored = StoredToken { access_token: token.to_string() };
        let raw = match serde_json::to_string(&stored) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(target: "haeksim", error = %e, "Token serialization failed; not persisted");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!(target: "haeksim", path = %self.path.display(), error = %e, "Token not persisted");
        }
    }

    pub fn clear(&self) {
        if self.path.exists() {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

pub struct Session {
    store: TokenStore,
    token: Option<String>,
    exercise: Option<ExercisePayload>,
    answers: Option<QuizAnswers>,
    summary: Option<String>,
}

impl Session {
    /// Build a session, restoring any previously persisted token.
    #[instrument(level = "info", skip_all)]
    pub fn new(store: TokenStore) -> Self {
        let token = store.load();
        if token.is_some() {
            info!(target: "haeksim", "Restored persisted session token");
        }
        Self { store, token, exercise: None, answers: None, summary: None }
    }

    /// Bearer credential for authenticated requests, if present. When absent
    /// requests simply go out without credentials; there is no client-side
    /// guard beyond this accessor.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.exercise = None;
        self.answers = None;
        self.summary = None;
    }

    /// Written by the generation dispatcher, read by the exercise screens.
    pub fn put_exercise(&mut self, payload: ExercisePayload) {
        self.exercise = Some(payload);
    }

    /// Current payload, or the defined fallback for `mode` when the user
    /// deep-linked to an exercise screen without generating anything.
    pub fn exercise_or_fallback(&self, mode: FeatureMode) -> ExercisePayload {
        match &self.exercise {
            Some(p) => p.clone(),
            None => ExercisePayload::fallback(mode),
        }
    }

    pub fn put_answers(&mut self, answers: QuizAnswers) {
        self.answers = Some(answers);
    }

    pub fn answers(&self) -> Option<&QuizAnswers> {
        self.answers.as_ref()
    }

    pub fn put_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
