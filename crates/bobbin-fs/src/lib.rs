//! Filesystem layer for Bobbin
//!
//! Provides project-relative path handling, atomic locked writes, the
//! content checksum used to detect unchanged downloads, and a
//! format-agnostic store for settings files.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{CHECKSUM_LEN, compute_content_checksum};
pub use config::ConfigStore;
pub use constants::BobbinPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
