use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One build output unit from Vite's `manifest.json`.
///
/// Missing or `null` fields default to empty/false; fields Vite emits that are
/// not listed here (e.g. `dynamicImports`) are ignored. PascalCase keys
/// (`File`, `Css`, ...) are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViteAsset {
    /// Output file, relative to the build output directory.
    #[serde(alias = "File", deserialize_with = "null_as_default")]
    pub file: String,

    /// Source file the chunk was built from.
    #[serde(alias = "Src", deserialize_with = "null_as_default")]
    pub src: String,

    /// Whether the chunk is a build entry point.
    #[serde(alias = "IsEntry", deserialize_with = "null_as_default")]
    pub is_entry: bool,

    /// Manifest keys of statically imported chunks (preloaded).
    #[serde(alias = "Imports", deserialize_with = "null_as_default")]
    pub imports: Vec<String>,

    /// Stylesheets emitted for the chunk.
    #[serde(alias = "Css", alias = "CSS", deserialize_with = "null_as_default")]
    pub css: Vec<String>,

    /// Other static assets referenced by the chunk.
    #[serde(alias = "Assets", deserialize_with = "null_as_default")]
    pub assets: Vec<String>,
}

/// Vite manifest: logical asset name -> [`ViteAsset`].
///
/// Read-only once loaded; reload by constructing a new [`Vite`](crate::Vite).
/// A `null` document is an empty manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViteManifest(BTreeMap<String, ViteAsset>);

impl<'de> Deserialize<'de> for ViteManifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        null_as_default(deserializer).map(Self)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ViteManifest {
    /// Look up an asset by its manifest key.
    pub fn lookup(&self, name: &str) -> Option<&ViteAsset> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViteAsset)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entry points only.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ViteAsset)> {
        self.iter().filter(|(_, asset)| asset.is_entry)
    }
}

impl From<BTreeMap<String, ViteAsset>> for ViteManifest {
    fn from(map: BTreeMap<String, ViteAsset>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, ViteAsset)> for ViteManifest {
    fn from_iter<I: IntoIterator<Item = (K, ViteAsset)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
