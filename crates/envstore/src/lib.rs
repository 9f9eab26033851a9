//! envstore keeps named configuration records ("env details") for client
//! applications.
//!
//! # Features
//!
//! - One namespace per application, created on first write
//! - Records carry a string, list or map value
//! - Names are unique within a namespace, records are never updated in place
//! - HTTP basic authentication against a single configured user
//! - Pluggable document store (see [`doc_adapter::DocAdapter`])

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and the adapter trait from envstore-types
pub use envstore_types::doc_adapter;
pub use envstore_types::error;
pub use envstore_types::types;
pub use envstore_types::utils;

// Feature crate re-exports
pub use envstore_core::middleware;
pub use envstore_details as details;

// Local modules
pub mod app;
pub mod config;
pub mod prelude;
pub mod routes;

pub use app::AppBuilder;
pub use config::Config;

// vim: ts=4
