//! App state type

use std::sync::Arc;

use envstore_types::doc_adapter::DocAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub doc_adapter: Arc<dyn DocAdapter>,
}

pub type App = Arc<AppState>;

pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// The single user allowed through the credential check
	pub auth_user: Box<str>,
	pub auth_password: Box<str>,
}

impl std::fmt::Debug for AppBuilderOpts {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppBuilderOpts")
			.field("listen", &self.listen)
			.field("auth_user", &self.auth_user)
			.field("auth_password", &"<redacted>")
			.finish()
	}
}

// vim: ts=4
