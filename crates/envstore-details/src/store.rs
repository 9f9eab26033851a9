//! Namespace-scoped record storage on top of the document store

use serde_json::Value;
use std::sync::Arc;

use envstore_types::doc_adapter::{DocAdapter, ID_FIELD};

use crate::prelude::*;

const NAME_FIELD: &str = "name";

/// Thin facade over the document store. Store faults are passed on unchanged,
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct RecordStore {
	adapter: Arc<dyn DocAdapter>,
}

impl RecordStore {
	pub fn new(adapter: Arc<dyn DocAdapter>) -> Self {
		Self { adapter }
	}

	/// Persist a new record. Any id on the input is discarded, the store assigns one.
	pub async fn create(&self, ns: &NamespaceId, mut record: ConfigRecord) -> ClResult<ConfigRecord> {
		record.id = None;
		let mut doc = serde_json::to_value(&record)?;
		if let Value::Object(ref mut obj) = doc {
			obj.remove(ID_FIELD);
		}

		let stored = self.adapter.save(ns.as_str(), doc).await?;
		Ok(serde_json::from_value(stored)?)
	}

	pub async fn list_all(&self, ns: &NamespaceId) -> ClResult<Vec<ConfigRecord>> {
		let docs = self.adapter.find_all(ns.as_str()).await?;
		docs.into_iter().map(|doc| serde_json::from_value(doc).map_err(Error::from)).collect()
	}

	/// Remove every record called `name`, returns how many went away
	pub async fn delete_by_name(&self, ns: &NamespaceId, name: &str) -> ClResult<u64> {
		self.adapter.remove(ns.as_str(), NAME_FIELD, &Value::from(name)).await
	}

	pub async fn delete_by_id(&self, ns: &NamespaceId, id: &str) -> ClResult<u64> {
		self.adapter.remove(ns.as_str(), ID_FIELD, &Value::from(id)).await
	}

	/// All application namespaces. Collections without the namespace prefix are skipped.
	pub async fn list_namespaces(&self) -> ClResult<Vec<NamespaceId>> {
		let collections = self.adapter.list_collections().await?;
		Ok(collections
			.into_iter()
			.map(NamespaceId::new)
			.filter(|ns| ns.app_name().is_some())
			.collect())
	}

	pub async fn count(&self, ns: &NamespaceId) -> ClResult<u64> {
		self.adapter.count_documents(ns.as_str()).await
	}

	pub async fn drop_namespace(&self, ns: &NamespaceId) -> ClResult<()> {
		self.adapter.drop_collection(ns.as_str()).await
	}
}

// vim: ts=4
