//! Filesystem access for resume-cleanup
//!
//! Whole-file text reads, atomic overwrites and plan loading, all keyed by
//! [`NormalizedPath`].

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
