//! Operations across all application namespaces

use crate::prelude::*;
use crate::store::RecordStore;

/// Name of the synthesized record listing the applications
pub const APP_NAMES_RECORD: &str = "app_names";

/// Synthesize a record whose list value holds every application name.
/// The record is a view, it is never stored.
pub async fn list_app_names(store: &RecordStore) -> ClResult<ConfigRecord> {
	let namespaces = store.list_namespaces().await?;
	let mut app_names: Vec<&str> = namespaces.iter().filter_map(NamespaceId::app_name).collect();
	app_names.sort_unstable();

	Ok(ConfigRecord::named(APP_NAMES_RECORD).with_list(app_names))
}

/// Drop every namespace that currently holds no records.
///
/// Best effort: a record created between the count and the drop is lost with
/// the namespace. Returns the dropped namespaces.
pub async fn prune_empty_namespaces(store: &RecordStore) -> ClResult<Vec<NamespaceId>> {
	let mut dropped = Vec::new();

	for ns in store.list_namespaces().await? {
		let count = store.count(&ns).await?;
		if count == 0 {
			store.drop_namespace(&ns).await?;
			info!(namespace = %ns, "Dropped empty namespace");
			dropped.push(ns);
		} else {
			debug!(namespace = %ns, count, "Keeping namespace");
		}
	}

	Ok(dropped)
}

// vim: ts=4
