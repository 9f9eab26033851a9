//! Core infrastructure for envstore.
//!
//! Application state, the basic-credential middleware guarding the API and the
//! extractors handlers use to read what the middleware established.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod middleware;
pub mod prelude;

// Re-export commonly used types
pub use app::{App, AppBuilderOpts, AppState, VERSION};
pub use extract::Auth;

// vim: ts=4
