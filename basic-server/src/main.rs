use std::sync::Arc;

use envstore::prelude::*;
use envstore::{AppBuilder, Config};
use envstore_doc_adapter_redb::DocAdapterRedb;

#[tokio::main]
async fn main() -> ClResult<()> {
	let mut builder = AppBuilder::new();

	let config = Config::from_env().map_err(|e| {
		error!("FATAL: {}", e);
		e
	})?;
	debug!("{:?}", config);

	let doc_adapter = Arc::new(DocAdapterRedb::new(&config.db_dir).await?);

	builder
		.listen(config.listen())
		.auth_user(config.auth_user)
		.auth_password(config.auth_password)
		.doc_adapter(doc_adapter);
	builder.run().await
}

// vim: ts=4
