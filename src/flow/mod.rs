//! Screen controllers for the session flow.
//!
//! Each controller owns exactly the local state its screen had (selection,
//! text inputs, font size, submitting flag) and exposes the user operations.
//! Navigation decisions are returned as `Route` values; the driver owns the
//! history stack. Cosmetic delays (loading spinners, success-message timers)
//! are returned as data and never executed here, so tests stay timer-free.

pub mod auth;
pub mod chat;
pub mod quiz;
pub mod results;
pub mod settings;
pub mod summary;
