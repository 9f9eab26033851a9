//! Shared types, the document store adapter trait, and core utilities for envstore.
//!
//! This crate contains the foundational types that are shared between the
//! server crates and all adapter implementations, so adapter crates compile
//! without pulling in the HTTP layer.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod doc_adapter;
pub mod error;
pub mod prelude;
pub mod types;
pub mod utils;

// vim: ts=4
