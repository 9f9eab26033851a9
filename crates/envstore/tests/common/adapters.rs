//! Scripted in-memory document store
//!
//! Keeps collections in a map, records every call it receives and fails any
//! operation that was scripted to fail with the given message.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use envstore::doc_adapter::{DocAdapter, ID_FIELD};
use envstore::error::{ClResult, Error};
use envstore::utils::random_id;

/// One call received by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	Save(String),
	FindAll(String),
	Remove(String, String, Value),
	ListCollections,
	DropCollection(String),
	CountDocuments(String),
	Close,
}

impl Call {
	fn op(&self) -> &'static str {
		match self {
			Call::Save(_) => "save",
			Call::FindAll(_) => "find_all",
			Call::Remove(..) => "remove",
			Call::ListCollections => "list_collections",
			Call::DropCollection(_) => "drop_collection",
			Call::CountDocuments(_) => "count_documents",
			Call::Close => "close",
		}
	}

	pub fn is_write(&self) -> bool {
		matches!(self, Call::Save(_) | Call::Remove(..) | Call::DropCollection(_))
	}
}

#[derive(Debug, Default)]
struct State {
	collections: BTreeMap<String, Vec<Value>>,
	failures: HashMap<&'static str, String>,
	calls: Vec<Call>,
}

#[derive(Debug, Default)]
pub struct MemoryDocAdapter {
	state: Mutex<State>,
}

impl MemoryDocAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a collection holding `docs` as they are, ids included
	pub fn with_collection(self, name: &str, docs: Vec<Value>) -> Self {
		self.state.lock().unwrap().collections.insert(name.to_string(), docs);
		self
	}

	/// Make every later call of `op` fail with `message`
	pub fn fail_on(&self, op: &'static str, message: &str) {
		self.state.lock().unwrap().failures.insert(op, message.to_string());
	}

	pub fn calls(&self) -> Vec<Call> {
		self.state.lock().unwrap().calls.clone()
	}

	pub fn clear_calls(&self) {
		self.state.lock().unwrap().calls.clear();
	}

	pub fn collection_names(&self) -> Vec<String> {
		self.state.lock().unwrap().collections.keys().cloned().collect()
	}

	pub fn docs(&self, collection: &str) -> Vec<Value> {
		self.state.lock().unwrap().collections.get(collection).cloned().unwrap_or_default()
	}

	fn record(&self, call: Call) -> ClResult<std::sync::MutexGuard<'_, State>> {
		let mut state = self.state.lock().unwrap();
		let op = call.op();
		state.calls.push(call);
		if let Some(message) = state.failures.get(op) {
			return Err(Error::DbError(message.clone()));
		}
		Ok(state)
	}
}

#[async_trait]
impl DocAdapter for MemoryDocAdapter {
	async fn save(&self, collection: &str, doc: Value) -> ClResult<Value> {
		let mut state = self.record(Call::Save(collection.to_string()))?;
		let Value::Object(mut obj) = doc else {
			return Err(Error::SerializationError("document must be a JSON object".into()));
		};
		obj.insert(ID_FIELD.to_string(), Value::String(random_id()?));
		let doc = Value::Object(obj);
		state.collections.entry(collection.to_string()).or_default().push(doc.clone());
		Ok(doc)
	}

	async fn find_all(&self, collection: &str) -> ClResult<Vec<Value>> {
		let state = self.record(Call::FindAll(collection.to_string()))?;
		Ok(state.collections.get(collection).cloned().unwrap_or_default())
	}

	async fn remove(&self, collection: &str, field: &str, value: &Value) -> ClResult<u64> {
		let mut state =
			self.record(Call::Remove(collection.to_string(), field.to_string(), value.clone()))?;
		let Some(docs) = state.collections.get_mut(collection) else {
			return Ok(0);
		};
		let before = docs.len();
		docs.retain(|doc| doc.get(field) != Some(value));
		Ok((before - docs.len()) as u64)
	}

	async fn list_collections(&self) -> ClResult<Vec<Box<str>>> {
		let state = self.record(Call::ListCollections)?;
		Ok(state.collections.keys().map(|name| name.as_str().into()).collect())
	}

	async fn drop_collection(&self, collection: &str) -> ClResult<()> {
		let mut state = self.record(Call::DropCollection(collection.to_string()))?;
		state.collections.remove(collection);
		Ok(())
	}

	async fn count_documents(&self, collection: &str) -> ClResult<u64> {
		let state = self.record(Call::CountDocuments(collection.to_string()))?;
		Ok(state.collections.get(collection).map_or(0, Vec::len) as u64)
	}

	async fn close(&self) -> ClResult<()> {
		let _state = self.record(Call::Close)?;
		Ok(())
	}
}

// vim: ts=4
