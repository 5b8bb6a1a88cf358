//! Error taxonomy for the session flow.
//!
//! Four families, matching how they are surfaced to the user:
//!   - local validation (caught before any network call, fixed inline)
//!   - server-rejected requests (message extracted from the response body)
//!   - transport failures (no response at all; "check your connection")
//!   - missing preconditions (screen opened without its data; render fallback)
//!
//! Nothing here is fatal. Controllers turn these into inline messages and
//! leave the screen unchanged.

use thiserror::Error;

/// Failures of a single backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
  /// The server answered with a non-2xx status. The payload is the
  /// human-readable message extracted from the `detail` body.
  #[error("{0}")]
  Rejected(String),

  /// No response was received (DNS, connect, timeout). Distinct from
  /// `Rejected` so the user knows to check connectivity, not their input.
  #[error("서버에 연결할 수 없습니다. 네트워크 상태를 확인해 주세요.")]
  Unreachable,

  /// The server answered 2xx but the body was not usable.
  #[error("서버 응답을 해석할 수 없습니다: {0}")]
  Malformed(String),
}

/// Login/signup failures, including the checks that never reach the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
  #[error("비밀번호가 일치하지 않습니다.")]
  PasswordMismatch,

  #[error("비밀번호에는 대문자가 최소 1자 포함되어야 합니다.")]
  MissingUppercase,

  /// HTTP 200 without a token field: treated as an error, no navigation.
  #[error("로그인에 성공했지만 토큰이 응답에 없습니다.")]
  TokenMissing,

  #[error(transparent)]
  Api(#[from] ApiError),
}

/// Chat overlay input rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
  #[error("메시지를 입력해 주세요.")]
  EmptyMessage,
}
