//! Core utilities and types shared across all Syzygy crates

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{default_config, load_config, save_config, Config};
pub use error::{SyzygyError, SyzygyResult};

/// Version information for the Syzygy project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
