pub use crate::app::App;
pub use envstore_types::error::{ClResult, Error};
pub use envstore_types::types::{ConfigRecord, Envelope, NamespaceId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
