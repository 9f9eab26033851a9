//! Redb-based Document Adapter
//!
//! Implements the DocAdapter trait on a single redb file.
//!
//! # Storage Layout
//!
//! - `collections` - registry of collection names (`name -> ""`)
//! - `docs` - documents as JSON, keyed by `{len}:{collection}{id}`
//!
//! `len` is the byte length of the collection name. Every collection's documents
//! form one contiguous key range, so listing, counting and dropping a collection
//! are prefix scans. The length keeps collection names that extend one another
//! (`app_a`, `app_a\x1fb`) from sharing a range, whatever characters they hold.
//!
//! Each trait method runs in exactly one redb transaction on the blocking pool.

#![forbid(unsafe_code)]

mod error;

use async_trait::async_trait;
use redb::{ReadableDatabase, ReadableTable};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use envstore::doc_adapter::{DocAdapter, ID_FIELD};
use envstore::prelude::*;
use envstore::utils::random_id;

pub use error::Error;
use error::from_redb_error;

/// File name of the store inside the storage directory
pub const DB_FILE: &str = "docs.redb";

// Storage table definitions
mod tables {
	use redb::TableDefinition;

	/// Registry of collections: name -> ""
	pub const TABLE_COLLECTIONS: TableDefinition<&str, &str> = TableDefinition::new("collections");

	/// Documents: len:collection id -> document_json
	pub const TABLE_DOCS: TableDefinition<&str, &str> = TableDefinition::new("docs");
}

use tables::*;

/// Document adapter using redb for storage
pub struct DocAdapterRedb {
	/// Path of the redb file
	db_path: PathBuf,

	/// Open database, `None` once closed
	db: RwLock<Option<Arc<redb::Database>>>,
}

impl DocAdapterRedb {
	/// Open (or create) the document store in `storage_dir`
	pub async fn new(storage_dir: impl AsRef<Path>) -> ClResult<Self> {
		let storage_dir = storage_dir.as_ref().to_path_buf();
		tokio::fs::create_dir_all(&storage_dir).await?;

		let db_path = storage_dir.join(DB_FILE);
		let path = db_path.clone();
		let db = tokio::task::spawn_blocking(move || open_db(&path))
			.await
			.map_err(Error::from)??;

		info!("Opened document store at {:?}", db_path);

		Ok(Self { db_path, db: RwLock::new(Some(Arc::new(db))) })
	}

	async fn db(&self) -> Result<Arc<redb::Database>, Error> {
		self.db.read().await.as_ref().map(Arc::clone).ok_or(Error::Closed)
	}

	/// Run a storage operation on the blocking pool
	async fn run<T, F>(&self, f: F) -> ClResult<T>
	where
		T: Send + 'static,
		F: FnOnce(&redb::Database) -> Result<T, Error> + Send + 'static,
	{
		let db = self.db().await?;
		let res = tokio::task::spawn_blocking(move || f(&db)).await.map_err(Error::from)?;
		Ok(res?)
	}
}

fn open_db(path: &Path) -> Result<redb::Database, Error> {
	let db = redb::Database::create(path).map_err(from_redb_error)?;

	// Create tables if they don't exist
	let tx = db.begin_write().map_err(from_redb_error)?;
	let _ = tx.open_table(TABLE_COLLECTIONS).map_err(from_redb_error)?;
	let _ = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
	tx.commit().map_err(from_redb_error)?;

	Ok(db)
}

fn key_prefix(collection: &str) -> String {
	format!("{}:{}", collection.len(), collection)
}

fn doc_key(collection: &str, id: &str) -> String {
	format!("{}{}", key_prefix(collection), id)
}

/// Keys and parsed documents of a collection, in key order
fn scan_collection(
	table: &impl ReadableTable<&'static str, &'static str>,
	collection: &str,
) -> Result<Vec<(String, Value)>, Error> {
	let prefix = key_prefix(collection);
	let mut docs = Vec::new();

	for item in table.range(prefix.as_str()..).map_err(from_redb_error)? {
		let (key, value) = item.map_err(from_redb_error)?;
		let key_str = key.value();
		if !key_str.starts_with(&prefix) {
			break;
		}
		docs.push((key_str.to_string(), serde_json::from_str(value.value())?));
	}

	Ok(docs)
}

#[async_trait]
impl DocAdapter for DocAdapterRedb {
	async fn save(&self, collection: &str, doc: Value) -> ClResult<Value> {
		let Value::Object(mut obj) = doc else {
			return Err(Error::SerializationError("document must be a JSON object".into()).into());
		};
		let id = random_id()?;
		obj.insert(ID_FIELD.to_string(), Value::String(id.clone()));
		let doc = Value::Object(obj);

		let collection = collection.to_string();
		let json = serde_json::to_string(&doc)?;
		self.run(move |db| {
			let tx = db.begin_write().map_err(from_redb_error)?;
			{
				let mut collections = tx.open_table(TABLE_COLLECTIONS).map_err(from_redb_error)?;
				if collections.get(collection.as_str()).map_err(from_redb_error)?.is_none() {
					collections.insert(collection.as_str(), "").map_err(from_redb_error)?;
					debug!("Created collection {}", collection);
				}

				let mut docs = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
				docs.insert(doc_key(&collection, &id).as_str(), json.as_str())
					.map_err(from_redb_error)?;
			}
			tx.commit().map_err(from_redb_error)?;
			Ok(())
		})
		.await?;

		Ok(doc)
	}

	async fn find_all(&self, collection: &str) -> ClResult<Vec<Value>> {
		let collection = collection.to_string();
		self.run(move |db| {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let docs = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
			Ok(scan_collection(&docs, &collection)?.into_iter().map(|(_, doc)| doc).collect())
		})
		.await
	}

	async fn remove(&self, collection: &str, field: &str, value: &Value) -> ClResult<u64> {
		let collection = collection.to_string();
		let field = field.to_string();
		let value = value.clone();
		self.run(move |db| {
			let tx = db.begin_write().map_err(from_redb_error)?;
			let removed = {
				let mut docs = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
				// Collect keys first, the range borrows the table
				let keys: Vec<String> = scan_collection(&docs, &collection)?
					.into_iter()
					.filter(|(_, doc)| doc.get(&field) == Some(&value))
					.map(|(key, _)| key)
					.collect();
				for key in &keys {
					docs.remove(key.as_str()).map_err(from_redb_error)?;
				}
				keys.len() as u64
			};
			tx.commit().map_err(from_redb_error)?;
			debug!("Removed {} documents from {}", removed, collection);
			Ok(removed)
		})
		.await
	}

	async fn list_collections(&self) -> ClResult<Vec<Box<str>>> {
		self.run(|db| {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let collections = tx.open_table(TABLE_COLLECTIONS).map_err(from_redb_error)?;

			let mut names = Vec::new();
			for item in collections.iter().map_err(from_redb_error)? {
				let (key, _) = item.map_err(from_redb_error)?;
				names.push(key.value().into());
			}
			Ok(names)
		})
		.await
	}

	async fn drop_collection(&self, collection: &str) -> ClResult<()> {
		let collection = collection.to_string();
		self.run(move |db| {
			let tx = db.begin_write().map_err(from_redb_error)?;
			{
				let mut docs = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
				let keys: Vec<String> =
					scan_collection(&docs, &collection)?.into_iter().map(|(key, _)| key).collect();
				for key in &keys {
					docs.remove(key.as_str()).map_err(from_redb_error)?;
				}

				let mut collections = tx.open_table(TABLE_COLLECTIONS).map_err(from_redb_error)?;
				collections.remove(collection.as_str()).map_err(from_redb_error)?;
			}
			tx.commit().map_err(from_redb_error)?;
			info!("Dropped collection {}", collection);
			Ok(())
		})
		.await
	}

	async fn count_documents(&self, collection: &str) -> ClResult<u64> {
		let collection = collection.to_string();
		self.run(move |db| {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let docs = tx.open_table(TABLE_DOCS).map_err(from_redb_error)?;
			let prefix = key_prefix(&collection);

			let mut count = 0;
			for item in docs.range(prefix.as_str()..).map_err(from_redb_error)? {
				let (key, _) = item.map_err(from_redb_error)?;
				if !key.value().starts_with(&prefix) {
					break;
				}
				count += 1;
			}
			Ok(count)
		})
		.await
	}

	async fn close(&self) -> ClResult<()> {
		if self.db.write().await.take().is_some() {
			info!("Closed document store at {:?}", self.db_path);
		}
		Ok(())
	}
}

impl std::fmt::Debug for DocAdapterRedb {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DocAdapterRedb").field("db_path", &self.db_path).finish()
	}
}

// vim: ts=4
