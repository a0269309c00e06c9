use tracing::trace;

use crate::config::{self, Config};
use crate::error::Result;
use crate::manifest::{self, ViteManifest};
use crate::tags::{self, Html};

/// Template helper bound to one configuration and one manifest.
///
/// The mode is fixed at construction by `Config::dev_server_enabled`:
/// - dev mode: tags point at the Vite dev server, the manifest is not consulted;
/// - production mode: tags are resolved through the manifest.
///
/// A `Vite` is immutable after construction; share it across render threads
/// behind an `Arc` or a reference.
#[derive(Debug, Clone)]
pub struct Vite {
    config: Config,
    manifest: ViteManifest,
}

impl Vite {
    /// Resolve `config` against the defaults and load the manifest it points to.
    ///
    /// The manifest is loaded in both modes, so a missing or malformed
    /// manifest fails here rather than at render time.
    pub fn new(config: Option<Config>) -> Result<Self> {
        let config = config::resolve(config);
        let manifest = manifest::load_from_path(&config.manifest_path)?;
        Ok(Self { config, manifest })
    }

    /// Build an instance over an already loaded manifest. Performs no I/O;
    /// `manifest_path` is ignored.
    pub fn with_manifest(config: Option<Config>, manifest: ViteManifest) -> Self {
        Self {
            config: config::resolve(config),
            manifest,
        }
    }

    /// Returns a reference to the resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the loaded manifest.
    pub fn manifest(&self) -> &ViteManifest {
        &self.manifest
    }

    /// Is the dev server mode enabled?
    pub fn is_dev(&self) -> bool {
        self.config.dev_server_enabled
    }

    /// Vite client script for the page head.
    ///
    /// Empty in production mode.
    pub fn client_tag(&self) -> Html {
        if !self.is_dev() {
            return Html::empty();
        }
        let url = self.config.dev_server_url(&self.config.web_socket_client_url);
        trace!(target: "vitebridge::instance", %url, "client tag");
        tags::dev_script_tag(&url)
    }

    /// Tags that load the asset `name`.
    ///
    /// In dev mode this is a single script tag served by the dev server. In
    /// production mode it is the module script, stylesheets and preloads from
    /// the manifest entry, or empty when `name` is not in the manifest.
    pub fn asset_tag(&self, name: &str) -> Html {
        if self.is_dev() {
            let url = self.config.dev_server_url(name);
            trace!(target: "vitebridge::instance", %url, "dev asset tag");
            return tags::dev_script_tag(&url);
        }

        match self.manifest.lookup(name) {
            Some(asset) => tags::render_asset_tags(asset),
            None => {
                trace!(target: "vitebridge::instance", asset = %name, "asset not in manifest");
                Html::empty()
            }
        }
    }
}
