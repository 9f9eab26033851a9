//! Application name to namespace mapping

use envstore_types::types::NAMESPACE_PREFIX;

use crate::prelude::*;

/// Namespace holding the records of `app_name`.
///
/// The name is used as-is: a malformed application name simply maps to a
/// namespace nobody has written to, which reads as empty.
pub fn resolve_namespace(app_name: &str) -> NamespaceId {
	NamespaceId::new(format!("{}{}", NAMESPACE_PREFIX, app_name))
}


// vim: ts=4
