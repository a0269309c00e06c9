use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::models::ViteManifest;
use crate::error::{ManifestError, Result};

/// Parse a manifest from a string slice.
pub fn load_from_str(s: &str) -> Result<ViteManifest> {
    Ok(serde_json::from_str(s)?)
}

/// Parse a manifest from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<ViteManifest> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read and parse the manifest file at `path`.
///
/// The whole file is read up front; a read failure and a parse failure are
/// reported as distinct [`ManifestError`] variants.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ViteManifest> {
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref).map_err(|source| ManifestError::Read {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let manifest: ViteManifest =
        serde_json::from_slice(&bytes).map_err(|source| ManifestError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })?;
    debug!(
        target: "vitebridge::manifest",
        path = %path_ref.display(),
        assets = manifest.len(),
        "Loaded manifest"
    );
    Ok(manifest)
}
