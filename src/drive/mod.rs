//! Drive API module
//!
//! Contains types, the storage backend trait, and the REST client for
//! interacting with the Drive API.

pub mod backend;
pub mod client;
pub mod types;
pub mod utils;
