//! Env details API handlers
//!
//! Every endpoint answers with an [`Envelope`], store faults included. Updates
//! are refused outright: a record is changed by deleting and re-creating it, so
//! creation stays the only path that validates.

use axum::{
	Json,
	extract::{Path, State, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
};

use envstore_core::extract::Auth;
use envstore_types::error::UPDATE_ERROR_MSG;

use crate::namespace::resolve_namespace;
use crate::prelude::*;
use crate::store::RecordStore;
use crate::{registry, validator};

/// Endpoint operation, names the failure in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Create,
	Read,
	Delete,
	LookAppNames,
	DeleteEmptyAppNames,
}

impl Operation {
	pub fn label(self) -> &'static str {
		match self {
			Operation::Create => "Create",
			Operation::Read => "Read",
			Operation::Delete => "Delete",
			Operation::LookAppNames => "Look App Names",
			Operation::DeleteEmptyAppNames => "Delete Empty App Names",
		}
	}
}

/// Error of a specific operation, rendered as an error envelope
#[derive(Debug)]
pub struct OpError {
	pub op: Operation,
	pub err: Error,
}

impl OpError {
	/// Client-visible message
	pub fn message(&self) -> String {
		match self.err {
			Error::ValidationError(_) | Error::UnsupportedOperation => self.err.to_string(),
			_ => format!("{} Exception: {}", self.op.label(), self.err),
		}
	}
}

impl IntoResponse for OpError {
	fn into_response(self) -> Response {
		match self.err {
			Error::ValidationError(_) | Error::UnsupportedOperation | Error::Unauthorized => {
				self.err.into_response()
			}
			_ => {
				let msg = self.message();
				error!("{}", msg);
				(StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::error(msg))).into_response()
			}
		}
	}
}

pub type OpResult<T> = std::result::Result<T, OpError>;

/// Attach the failing operation to an error
pub trait OpContext<T> {
	fn op(self, op: Operation) -> OpResult<T>;
}

impl<T> OpContext<T> for ClResult<T> {
	fn op(self, op: Operation) -> OpResult<T> {
		self.map_err(|err| OpError { op, err })
	}
}

fn record_store(app: &App) -> RecordStore {
	RecordStore::new(app.doc_adapter.clone())
}

/// POST /api/v1/{app_name} - Create a record
pub async fn post_record(
	State(app): State<App>,
	Auth(user): Auth,
	Path(app_name): Path<String>,
	body: Result<Json<ConfigRecord>, JsonRejection>,
) -> OpResult<(StatusCode, Json<Envelope>)> {
	let ns = resolve_namespace(&app_name);
	let Json(record) = body
		.map_err(|rejection| {
			error!(app = %app_name, "Env Details Validation Error: {}", rejection.body_text());
			Error::ValidationError(rejection.body_text())
		})
		.op(Operation::Create)?;

	let store = record_store(&app);
	validator::check_fields(&ns, &record).op(Operation::Create)?;
	let existing = store.list_all(&ns).await.op(Operation::Create)?;
	validator::check_unique(&ns, &record, &existing).op(Operation::Create)?;

	let stored = store.create(&ns, record).await.op(Operation::Create)?;
	info!(
		subject = %user,
		app = %app_name,
		name = %stored.name(),
		id = stored.id.as_deref().unwrap_or_default(),
		"Created env details"
	);

	Ok((StatusCode::OK, Json(Envelope::ok(vec![stored]))))
}

/// GET /api/v1/{app_name} - List all records of an application
pub async fn list_records(
	State(app): State<App>,
	Path(app_name): Path<String>,
) -> OpResult<(StatusCode, Json<Envelope>)> {
	let ns = resolve_namespace(&app_name);
	let records = record_store(&app).list_all(&ns).await.op(Operation::Read)?;
	debug!(app = %app_name, count = records.len(), "Read env details");

	Ok((StatusCode::OK, Json(Envelope::ok(records))))
}

/// PUT /api/v1/{app_name}/{id} - Always refused, the body is never read
pub async fn put_record(Path((app_name, id)): Path<(String, String)>) -> ClResult<Response> {
	error!(app = %app_name, id = %id, "{}", UPDATE_ERROR_MSG);
	Err(Error::UnsupportedOperation)
}

/// DELETE /api/v1/{app_name}/{name} - Remove records by name
pub async fn delete_record(
	State(app): State<App>,
	Auth(user): Auth,
	Path((app_name, name)): Path<(String, String)>,
) -> OpResult<StatusCode> {
	let ns = resolve_namespace(&app_name);
	let removed = record_store(&app).delete_by_name(&ns, &name).await.op(Operation::Delete)?;
	info!(subject = %user, app = %app_name, name = %name, removed, "Deleted env details");

	Ok(StatusCode::OK)
}

/// DELETE /api/v1/{app_name}/id/{id} - Remove a record by id
pub async fn delete_record_by_id(
	State(app): State<App>,
	Auth(user): Auth,
	Path((app_name, id)): Path<(String, String)>,
) -> OpResult<StatusCode> {
	let ns = resolve_namespace(&app_name);
	let removed = record_store(&app).delete_by_id(&ns, &id).await.op(Operation::Delete)?;
	info!(subject = %user, app = %app_name, id = %id, removed, "Deleted env details by id");

	Ok(StatusCode::OK)
}

/// GET /api/v1/appNames - Names of all applications
pub async fn get_app_names(State(app): State<App>) -> OpResult<(StatusCode, Json<Envelope>)> {
	let record =
		registry::list_app_names(&record_store(&app)).await.op(Operation::LookAppNames)?;

	Ok((StatusCode::OK, Json(Envelope::ok(vec![record]))))
}

/// DELETE /api/v1/appNames - Drop the namespaces of applications without records
pub async fn delete_empty_app_names(
	State(app): State<App>,
	Auth(user): Auth,
) -> OpResult<StatusCode> {
	let dropped = registry::prune_empty_namespaces(&record_store(&app))
		.await
		.op(Operation::DeleteEmptyAppNames)?;
	info!(subject = %user, dropped = dropped.len(), "Pruned empty app namespaces");

	Ok(StatusCode::OK)
}


// vim: ts=4
