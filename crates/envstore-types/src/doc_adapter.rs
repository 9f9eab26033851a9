//! Document Store Adapter
//!
//! Trait for pluggable document store backends. Documents are JSON objects
//! grouped into named collections; a collection comes into existence with the
//! first document saved into it and lives until it is dropped, even when empty.
//!
//! Every method is a single atomic operation on the backend. Nothing here spans
//! more than one call, so read-then-write sequences built on top of this trait
//! can interleave with concurrent writers.
//!
//! Each adapter implementation provides its own constructor handling backend-specific
//! initialization (database path, connection settings, etc.).

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::prelude::*;

/// Name of the field holding the store-assigned document identifier.
pub const ID_FIELD: &str = "id";

#[async_trait]
pub trait DocAdapter: Debug + Send + Sync {
	/// Persist a new document. A fresh `id` is assigned (replacing any present
	/// in `doc`) and the stored document is returned.
	async fn save(&self, collection: &str, doc: Value) -> ClResult<Value>;

	/// All documents of a collection. An unknown collection yields an empty list.
	async fn find_all(&self, collection: &str) -> ClResult<Vec<Value>>;

	/// Remove every document whose top-level `field` equals `value`.
	/// Returns the number of removed documents.
	async fn remove(&self, collection: &str, field: &str, value: &Value) -> ClResult<u64>;

	/// Names of all existing collections.
	async fn list_collections(&self) -> ClResult<Vec<Box<str>>>;

	/// Remove a collection together with its documents. No-op if it does not exist.
	async fn drop_collection(&self, collection: &str) -> ClResult<()>;

	/// Number of documents in a collection.
	async fn count_documents(&self, collection: &str) -> ClResult<u64>;

	/// Release the backend. Calls made after closing fail.
	async fn close(&self) -> ClResult<()>;
}

// vim: ts=4
