//! HTML tag formatting.
//!
//! Output is byte-stable: tag order, attribute order and the `\r\n` line
//! terminator are fixed so rendered pages can be diffed across releases.
//! Values are inserted verbatim; manifest paths and dev server URLs are trusted.

use serde::{Serialize, Serializer};
use std::fmt::{self, Write as _};

use crate::manifest::ViteAsset;

/// An HTML fragment that is safe to embed unescaped in a template.
///
/// Serializes as a plain string so it can be placed in a template context directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    /// The empty fragment, rendered when there is nothing to inject.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

impl Serialize for Html {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

const LINE_END: &str = "\r\n";

/// Script tag loading `src` as an ES module from the dev server.
pub fn dev_script_tag(src: &str) -> Html {
    Html(format!(r#"<script type="module" src="{src}"></script>"#))
}

/// Tags for a production asset, one per line, in this order:
/// the module script for `asset.file`, a stylesheet link per `asset.css` entry,
/// then a `modulepreload` link per `asset.imports` entry.
pub fn render_asset_tags(asset: &ViteAsset) -> Html {
    let mut out = String::with_capacity(
        64 + 48 * (asset.css.len() + asset.imports.len()) + asset.file.len(),
    );

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<script type="module" crossorigin src="{}"></script>{LINE_END}"#,
        asset.file
    );

    for css in &asset.css {
        let _ = write!(out, r#"<link rel="stylesheet" href="{css}">{LINE_END}"#);
    }

    for import in &asset.imports {
        let _ = write!(out, r#"<link rel="modulepreload" href="{import}">{LINE_END}"#);
    }

    Html(out)
}
