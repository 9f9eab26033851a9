//! Credential middleware
//!
//! Every API route sits behind HTTP basic authentication against the single
//! configured user. Failures are answered with 401 before any handler runs.

use axum::{
	extract::{Request, State},
	http::header,
	middleware::Next,
	response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use crate::extract::Auth;
use crate::prelude::*;

/// User name and password carried by a basic `Authorization` header
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
	pub user: String,
	pub password: String,
}

/// Parse an `Authorization` header value of the `Basic` scheme
pub fn parse_basic(header_value: &str) -> Option<BasicCredentials> {
	let (scheme, encoded) = header_value.trim().split_once(' ')?;
	if !scheme.eq_ignore_ascii_case("basic") {
		return None;
	}

	let decoded = STANDARD.decode(encoded.trim()).ok()?;
	let decoded = String::from_utf8(decoded).ok()?;
	let (user, password) = decoded.split_once(':')?;

	Some(BasicCredentials { user: user.to_string(), password: password.to_string() })
}

/// Compare two secrets without short-circuiting on the first differing byte
fn secret_eq(a: &str, b: &str) -> bool {
	let a = Sha256::digest(a.as_bytes());
	let b = Sha256::digest(b.as_bytes());
	a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Check credentials against the configured user
pub fn credentials_match(app: &App, creds: &BasicCredentials) -> bool {
	// Evaluate both, so a wrong user costs the same as a wrong password
	let user_ok = secret_eq(&creds.user, &app.opts.auth_user);
	let password_ok = secret_eq(&creds.password, &app.opts.auth_password);
	user_ok && password_ok
}

/// Middleware that rejects requests without valid basic credentials
pub async fn require_basic_auth(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> ClResult<Response> {
	let Some(creds) = req
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|h| h.to_str().ok())
		.and_then(parse_basic)
	else {
		debug!(path = %req.uri().path(), "Missing or malformed credentials");
		return Err(Error::Unauthorized);
	};

	if !credentials_match(&app, &creds) {
		warn!(subject = %creds.user, path = %req.uri().path(), "Invalid credentials");
		return Err(Error::Unauthorized);
	}

	req.extensions_mut().insert(Auth(creds.user.into()));

	Ok(next.run(req).await)
}


// vim: ts=4
