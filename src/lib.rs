//! Drive folder-tree library
//!
//! Path resolution, bounded tree building, and cycle-safe recursive listing
//! over a Google Drive-shaped storage backend. The backend is a trait; a
//! reqwest-based Drive v3 client implements it for production use.

pub mod config;
pub mod drive;
pub mod error;
pub mod ops;
pub mod tree;

pub use config::Config;
pub use error::{DriveTreeError, Result};
