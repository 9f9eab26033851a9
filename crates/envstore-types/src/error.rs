//! Error type shared by every envstore crate

use axum::{
	Json,
	http::{StatusCode, header},
	response::IntoResponse,
};

use crate::types::Envelope;

pub type ClResult<T> = std::result::Result<T, Error>;

/// Message returned to clients for any record validation failure
pub const VALIDATION_ERROR_MSG: &str = "Env Details Validation Error";

/// Message returned to clients for any update attempt
pub const UPDATE_ERROR_MSG: &str = "Update Exception! Update not available!! Delete and Create!!!";

/// Realm announced in `WWW-Authenticate` challenges
pub const AUTH_REALM: &str = "envstore";

#[derive(Debug)]
pub enum Error {
	/// Record failed validation. Carries the reason for the logs, clients only
	/// ever see [`VALIDATION_ERROR_MSG`].
	ValidationError(String),
	UnsupportedOperation,
	Unauthorized,
	/// Fault reported by the document store, message kept verbatim
	DbError(String),
	SerializationError(String),
	ConfigError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::SerializationError(err.to_string())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ValidationError(_) => write!(f, "{}", VALIDATION_ERROR_MSG),
			Error::UnsupportedOperation => write!(f, "{}", UPDATE_ERROR_MSG),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::DbError(msg) | Error::SerializationError(msg) | Error::Internal(msg) => {
				write!(f, "{}", msg)
			}
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "{}", err),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	/// HTTP status class of this error
	pub fn status(&self) -> StatusCode {
		match self {
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::UnsupportedOperation => StatusCode::METHOD_NOT_ALLOWED,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::Unauthorized => (
				StatusCode::UNAUTHORIZED,
				[(header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", AUTH_REALM))],
			)
				.into_response(),
			err => (err.status(), Json(Envelope::error(err.to_string()))).into_response(),
		}
	}
}


// vim: ts=4
