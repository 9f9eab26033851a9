//! Configuration records ("env details") of client applications
//!
//! Each application owns one namespace in the document store. Records are
//! validated on creation, never updated in place, and removed by name.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod handler;
pub mod namespace;
pub mod registry;
pub mod store;
pub mod validator;

mod prelude;

// vim: ts=4
