//! Router setup and request helpers

use axum::{
	Router,
	body::Body,
	http::{HeaderMap, Method, Request, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use envstore::app::{AppBuilderOpts, AppState};
use envstore::doc_adapter::DocAdapter;
use envstore::routes;
use envstore::types::Envelope;

pub const USER: &str = "admin";
pub const PASSWORD: &str = "s3cret";

/// Router over `doc_adapter`, guarded by [`USER`] / [`PASSWORD`]
pub fn build_router(doc_adapter: Arc<dyn DocAdapter>) -> Router {
	let app = Arc::new(AppState {
		opts: AppBuilderOpts {
			listen: "127.0.0.1:0".into(),
			auth_user: USER.into(),
			auth_password: PASSWORD.into(),
		},
		doc_adapter,
	});
	routes::init(app)
}

pub fn basic_auth(user: &str, password: &str) -> String {
	format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Authenticated request, with a JSON body when one is given
pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
	let builder = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::AUTHORIZATION, basic_auth(USER, PASSWORD));
	match body {
		Some(body) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	}
}

pub struct TestResponse {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl TestResponse {
	pub fn envelope(&self) -> Envelope {
		serde_json::from_slice(&self.body).unwrap()
	}

	pub fn json(&self) -> Value {
		serde_json::from_slice(&self.body).unwrap()
	}

	pub fn text(&self) -> String {
		String::from_utf8(self.body.clone()).unwrap()
	}
}

pub async fn send(router: &Router, req: Request<Body>) -> TestResponse {
	let response = router.clone().oneshot(req).await.unwrap();
	let status = response.status();
	let headers = response.headers().clone();
	let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

	TestResponse { status, headers, body }
}

// vim: ts=4
