//! Record validation
//!
//! A record is accepted when it has a name, carries at least one value, and no
//! record with the same name exists in its namespace. The checks run in that
//! order and stop at the first failure.
//!
//! Uniqueness is checked against a snapshot the caller fetched beforehand, not
//! enforced by the store. Two concurrent creates of the same name can both pass.

use envstore_types::utils::has_text;

use crate::prelude::*;

/// Name and value checks, which need no store access
pub fn check_fields(ns: &NamespaceId, candidate: &ConfigRecord) -> ClResult<()> {
	if !has_text(candidate.name.as_deref()) {
		error!(namespace = %ns, "Env Details Name is missing");
		return Err(Error::ValidationError("name is missing".into()));
	}

	let has_value = has_text(candidate.string_value.as_deref())
		|| candidate.list_value.as_ref().is_some_and(|l| !l.is_empty())
		|| candidate.map_value.as_ref().is_some_and(|m| !m.is_empty());
	if !has_value {
		error!(namespace = %ns, name = %candidate.name(), "Env Details Values are missing");
		return Err(Error::ValidationError("values are missing".into()));
	}

	Ok(())
}

/// Reject a candidate whose name is already taken in `existing`
pub fn check_unique(
	ns: &NamespaceId,
	candidate: &ConfigRecord,
	existing: &[ConfigRecord],
) -> ClResult<()> {
	if existing.iter().any(|record| record.name == candidate.name) {
		error!(namespace = %ns, name = %candidate.name(), "Env Details Name already exists");
		return Err(Error::ValidationError(format!("name {} already exists", candidate.name())));
	}

	Ok(())
}

/// Full validation of a candidate against the current namespace contents
pub fn check(ns: &NamespaceId, candidate: &ConfigRecord, existing: &[ConfigRecord]) -> ClResult<()> {
	check_fields(ns, candidate)?;
	check_unique(ns, candidate, existing)
}

pub fn validate(ns: &NamespaceId, candidate: &ConfigRecord, existing: &[ConfigRecord]) -> bool {
	check(ns, candidate, existing).is_ok()
}


// vim: ts=4
