use anyhow::{Context, Result, anyhow};
use schemars::{Schema, schema_for};
use serde_valid::Validate;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

use super::models::Config;

/// Load configuration from a string slice.
///
/// Missing or empty options fall back to their defaults.
pub fn load_from_str(s: &str) -> Result<Config> {
    let cfg: Config =
        serde_json::from_str(s).context("Failed to parse JSON config string into Config")?;
    finish(cfg)
}

/// Load configuration from any reader (e.g., a file).
pub fn load_from_reader<R: Read>(reader: R) -> Result<Config> {
    let cfg: Config =
        serde_json::from_reader(reader).context("Failed to parse JSON config from reader")?;
    finish(cfg)
}

/// Load configuration from a file path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .with_context(|| format!("Failed to open config file {}", path_ref.display()))?;
    let cfg = load_from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file {}", path_ref.display()))?;
    debug!(
        target: "vitebridge::config",
        path = %path_ref.display(),
        dev = cfg.dev_server_enabled,
        "Loaded config"
    );
    Ok(cfg)
}

/// Generate the JSON Schema for the options document.
pub fn generate_schema() -> Schema {
    schema_for!(Config)
}

/// Write the JSON Schema for the options document to any writer (pretty-printed).
pub fn write_schema_to_writer<W: Write>(mut writer: W) -> Result<()> {
    let schema = generate_schema();
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    writer
        .write_all(json.as_bytes())
        .context("Failed to write schema to writer")?;
    Ok(())
}

/// Check option values: every string option non-empty and the dev server port
/// numeric.
///
/// Documents loaded through `load_from_*` are resolved before this runs, so on
/// that path only the port format can fail. Call it directly on hand-built
/// configs that skip [`Config::resolve`].
pub fn validate_config(cfg: &Config) -> Result<()> {
    cfg.validate()
        .map_err(|errors| anyhow!("Invalid configuration: {errors}"))
}

fn finish(cfg: Config) -> Result<Config> {
    let cfg = cfg.resolve();
    validate_config(&cfg)?;
    Ok(cfg)
}
