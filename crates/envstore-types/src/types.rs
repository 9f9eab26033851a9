//! Common types used throughout envstore.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix of every collection that holds an application's records
pub const NAMESPACE_PREFIX: &str = "app_";

// ConfigRecord //
//**************//
/// One named configuration entry within an application namespace.
///
/// Every field is optional on the wire: requests may omit any of them and
/// validation decides what is acceptable. Serialized field names are camelCase
/// and nulls are kept, so existing clients see the exact same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigRecord {
	/// Store-assigned identifier, immutable once set
	pub id: Option<Box<str>>,
	pub name: Option<String>,
	pub string_value: Option<String>,
	pub list_value: Option<Vec<String>>,
	pub map_value: Option<BTreeMap<String, String>>,
}

impl ConfigRecord {
	pub fn named(name: impl Into<String>) -> Self {
		Self { name: Some(name.into()), ..Default::default() }
	}

	pub fn with_string(mut self, value: impl Into<String>) -> Self {
		self.string_value = Some(value.into());
		self
	}

	pub fn with_list(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.list_value = Some(values.into_iter().map(Into::into).collect());
		self
	}

	pub fn with_map(
		mut self,
		entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Self {
		self.map_value = Some(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
		self
	}

	pub fn name(&self) -> &str {
		self.name.as_deref().unwrap_or_default()
	}
}

// Envelope //
//**********//
/// Uniform response body: either a record list or an error message, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
	pub env_details: Option<Vec<ConfigRecord>>,
	pub err_msg: Option<String>,
}

impl Envelope {
	pub fn ok(records: Vec<ConfigRecord>) -> Self {
		Self { env_details: Some(records), err_msg: None }
	}

	pub fn error(msg: impl Into<String>) -> Self {
		Self { env_details: None, err_msg: Some(msg.into()) }
	}
}

// NamespaceId //
//*************//
/// Name of the store collection holding one application's records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(Box<str>);

impl NamespaceId {
	/// Wrap an existing collection name
	pub fn new(collection: impl Into<Box<str>>) -> Self {
		Self(collection.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Application name this namespace belongs to, `None` for foreign collections
	pub fn app_name(&self) -> Option<&str> {
		self.0.strip_prefix(NAMESPACE_PREFIX)
	}
}

impl std::fmt::Display for NamespaceId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl AsRef<str> for NamespaceId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}


// vim: ts=4
