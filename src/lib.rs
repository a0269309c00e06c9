#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! vitebridge — render Vite manifest entries as HTML tags for server-side templates.
//!
//! A [`Vite`] instance is built once at startup from a [`Config`] and exposes two
//! template helpers:
//! - [`Vite::client_tag`]: the Vite client script (dev mode only);
//! - [`Vite::asset_tag`]: tags for an entry, served by the dev server in dev mode
//!   or resolved through `manifest.json` in production.
//!
//! Modules:
//! - `config`: options, defaults, and loading from JSON.
//! - `manifest`: Vite manifest models and loader.
//! - `tags`: HTML formatting and the [`Html`] fragment type.
//! - `error`: construction errors.
//!
//! Use `vitebridge::prelude::*` to bring commonly used items into scope quickly.

/// Public module: configuration (models, loader, schema helpers).
pub mod config;
/// Public module: error types.
pub mod error;
/// Public module: Vite manifest (models, loader).
pub mod manifest;
/// Public module: HTML tag formatting.
pub mod tags;

mod instance;

pub use config::Config;
pub use error::ManifestError;
pub use instance::Vite;
pub use manifest::{ViteAsset, ViteManifest};
pub use tags::Html;

/// Crate-level constants for consumers that want to inspect package metadata at runtime.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version (e.g., "0.1.0").
#[inline]
pub const fn version() -> &'static str {
    PKG_VERSION
}

/// Environment variable read by [`init_tracing`] to override the log level.
pub const LOG_ENV: &str = "VITEBRIDGE_LOG";

/// Filter that passes events from this crate's targets (`vitebridge::*`) up to
/// `level` and drops everything else.
pub fn log_filter(level: tracing::Level) -> tracing_subscriber::filter::Targets {
    tracing_subscriber::filter::Targets::new().with_target(PKG_NAME, level)
}

/// Install a fmt subscriber that prints this crate's logs only.
///
/// The level is taken from `VITEBRIDGE_LOG` (trace|debug|info|warn|error)
/// when set and valid, otherwise `default_level`. Applications that already
/// run a subscriber should add [`log_filter`] to it instead.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing(default_level: tracing::Level) {
    use tracing_subscriber::{fmt, prelude::*};

    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default_level);

    // A global subscriber may already be installed by the host application.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(log_filter(level))
        .try_init();
}

/// A convenient set of exports for most consumers.
///
/// Bring this into scope with:
/// `use vitebridge::prelude::*;`
pub mod prelude {
    // Common result/error handling
    pub use crate::error::ManifestError;
    pub use anyhow::{Context, Error, Result, anyhow, bail, ensure};

    // Tracing macros
    pub use tracing::{debug, error, info, instrument, trace, warn};

    pub use crate as vitebridge;
    pub use crate::{Config, Html, Vite, ViteAsset, ViteManifest};
    pub use crate::{config, manifest, tags};
}
