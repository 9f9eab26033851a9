//! Startup configuration from environment variables

use std::path::PathBuf;

use crate::prelude::*;

pub const DEFAULT_PORT: u16 = 8002;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DB_DIR: &str = "./data";

pub const MISSING_ENV_MSG: &str =
	"One or more required env variables are missing for initialization...";

pub struct Config {
	pub listen_addr: Box<str>,
	pub port: u16,
	pub auth_user: Box<str>,
	pub auth_password: Box<str>,
	pub db_dir: PathBuf,
}

impl Config {
	/// Read the configuration from the process environment
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Read the configuration through `lookup`, which returns `None` for unset variables
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let auth_user = lookup("AUTH_USR");
		let auth_password = lookup("AUTH_PWD");
		let (Some(auth_user), Some(auth_password)) = (auth_user, auth_password) else {
			return Err(Error::ConfigError(MISSING_ENV_MSG.into()));
		};

		let port = match lookup("PORT") {
			Some(port) => port
				.trim()
				.parse()
				.map_err(|_| Error::ConfigError(format!("invalid PORT: {:?}", port)))?,
			None => DEFAULT_PORT,
		};

		Ok(Config {
			listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()).into(),
			port,
			auth_user: auth_user.into(),
			auth_password: auth_password.into(),
			db_dir: lookup("DB_DIR").unwrap_or_else(|| DEFAULT_DB_DIR.into()).into(),
		})
	}

	/// Socket address to bind
	pub fn listen(&self) -> String {
		format!("{}:{}", self.listen_addr, self.port)
	}
}

impl std::fmt::Debug for Config {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Config")
			.field("listen_addr", &self.listen_addr)
			.field("port", &self.port)
			.field("auth_user", &self.auth_user)
			.field("auth_password", &"<redacted>")
			.field("db_dir", &self.db_dir)
			.finish()
	}
}


// vim: ts=4
