//! Custom extractors for envstore-specific data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

// Auth //
//******//
/// Name of the user authenticated by the credential middleware
#[derive(Debug, Clone)]
pub struct Auth(pub Box<str>);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
