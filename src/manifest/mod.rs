//! Vite manifest module.
//!
//! - `models`: [`ViteManifest`] and [`ViteAsset`], deserialized from `manifest.json`.
//! - `loader`: read-once loading from a file, reader, or string.

pub mod loader;
pub mod models;

pub use loader::{load_from_path, load_from_reader, load_from_str};
pub use models::{ViteAsset, ViteManifest};
