use axum::{
	Router,
	http::StatusCode,
	middleware,
	routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use envstore_core::middleware::require_basic_auth;
use envstore_details::handler;

use crate::prelude::*;

fn init_api(app: App) -> Router {
	Router::new()
		// Static segment wins over {app_name}
		.route(
			"/api/v1/appNames",
			get(handler::get_app_names).delete(handler::delete_empty_app_names),
		)
		.route("/api/v1/{app_name}", post(handler::post_record).get(handler::list_records))
		.route(
			"/api/v1/{app_name}/{name}",
			delete(handler::delete_record).put(handler::put_record),
		)
		.route("/api/v1/{app_name}/id/{id}", delete(handler::delete_record_by_id))
		// Unknown paths need credentials too
		.fallback(async || StatusCode::NOT_FOUND)
		.layer(middleware::from_fn_with_state(app.clone(), require_basic_auth))
		.with_state(app)
}

fn init_public() -> Router {
	Router::new().route("/tests/ping", get(async || "pong"))
}

pub fn init(app: App) -> Router {
	Router::new().merge(init_public()).merge(init_api(app)).layer(TraceLayer::new_for_http())
}

// vim: ts=4
