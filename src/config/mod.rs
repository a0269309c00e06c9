//! Configuration module for vitebridge.
//!
//! Holds the [`Config`] options record, its defaults, the resolver that fills
//! empty options, and helpers to read options from a JSON document.
//!
//! Example:
//! use vitebridge::config::{self, Config};
//!
//! let cfg = config::resolve(Some(Config { dev_server_enabled: true, ..Default::default() }));

pub mod loader;
pub mod models;

// Re-export core data models
pub use models::{
    Config, DEFAULT_ASSETS_PATH, DEFAULT_DEV_SERVER_HOST, DEFAULT_DEV_SERVER_PORT,
    DEFAULT_DEV_SERVER_PROTOCOL, DEFAULT_MANIFEST_PATH, DEFAULT_WEB_SOCKET_CLIENT_URL, resolve,
};

// Re-export loader utilities
pub use loader::{
    generate_schema, load_from_path, load_from_reader, load_from_str, validate_config,
    write_schema_to_writer,
};
