pub use envstore_core::prelude::*;

// vim: ts=4
