//! Error types for the document adapter

use envstore::error::Error as EsError;
use std::fmt;

/// Document adapter specific errors
#[derive(Debug)]
pub enum Error {
	/// redb operation error
	DbError(String),

	/// I/O error
	IoError(String),

	/// Stored or supplied document is not usable JSON
	SerializationError(String),

	/// Operation attempted after `close()`
	Closed,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::DbError(msg) => write!(f, "Database error: {}", msg),
			Error::IoError(msg) => write!(f, "I/O error: {}", msg),
			Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
			Error::Closed => write!(f, "Document store is closed"),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::SerializationError(err.to_string())
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Error::IoError(err.to_string())
	}
}

impl From<tokio::task::JoinError> for Error {
	fn from(err: tokio::task::JoinError) -> Self {
		Error::DbError(err.to_string())
	}
}

impl From<Error> for EsError {
	fn from(err: Error) -> Self {
		// Store faults keep their message, it is shown to clients as-is
		EsError::DbError(err.to_string())
	}
}

/// Helper to convert redb errors
pub fn from_redb_error<E: fmt::Display>(err: E) -> Error {
	Error::DbError(err.to_string())
}

// vim: ts=4
