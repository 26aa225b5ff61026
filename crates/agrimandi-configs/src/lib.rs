//! agrimandi-configs
//!
//! Server configuration types and loader for the marketplace backend.

pub mod defaults;
pub mod loader;
pub mod types;

pub use types::{
    AuthSettings, CorsSettings, LoggingSettings, ServerConfig, ServerSettings, StorageSettings,
};
