//! App builder - constructs and runs the envstore application

use std::sync::Arc;

use crate::doc_adapter::DocAdapter;
use crate::prelude::*;
use crate::routes;
pub use envstore_core::app::{App, AppBuilderOpts, AppState, VERSION};

pub struct AppBuilder {
	opts: AppBuilderOpts,
	doc_adapter: Option<Arc<dyn DocAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "0.0.0.0:8002".into(),
				auth_user: "".into(),
				auth_password: "".into(),
			},
			doc_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn auth_user(&mut self, auth_user: impl Into<Box<str>>) -> &mut Self {
		self.opts.auth_user = auth_user.into();
		self
	}
	pub fn auth_password(&mut self, auth_password: impl Into<Box<str>>) -> &mut Self {
		self.opts.auth_password = auth_password.into();
		self
	}

	// Adapters
	pub fn doc_adapter(&mut self, doc_adapter: Arc<dyn DocAdapter>) -> &mut Self {
		self.doc_adapter = Some(doc_adapter);
		self
	}

	pub async fn run(self) -> ClResult<()> {
		info!("Begin application initialization...");
		info!("envstore V{}", VERSION);

		if self.opts.auth_user.is_empty() || self.opts.auth_password.is_empty() {
			error!("FATAL: No API credentials configured");
			return Err(Error::ConfigError("No API credentials configured".to_string()));
		}
		let Some(doc_adapter) = self.doc_adapter else {
			error!("FATAL: No document adapter configured");
			return Err(Error::Internal("No document adapter configured".to_string()));
		};

		let app: App = Arc::new(AppState { opts: self.opts, doc_adapter });
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			e
		})?;
		info!("Listening on HTTP {}", app.opts.listen);
		info!("End application initialization...");

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

		info!("Shutting down");
		app.doc_adapter.close().await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(e) = tokio::signal::ctrl_c().await {
			warn!("Failed to listen for Ctrl-C: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(e) => {
				warn!("Failed to listen for SIGTERM: {}", e);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}
	info!("Shutdown signal received");
}

// vim: ts=4
