use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Default dev server protocol.
pub const DEFAULT_DEV_SERVER_PROTOCOL: &str = "http";
/// Default dev server host.
pub const DEFAULT_DEV_SERVER_HOST: &str = "localhost";
/// Default dev server port.
pub const DEFAULT_DEV_SERVER_PORT: &str = "3001";
/// Default path of the Vite client script on the dev server.
/// See <https://vitejs.dev/guide/backend-integration.html>.
pub const DEFAULT_WEB_SOCKET_CLIENT_URL: &str = "@vite/client";
/// Default source assets directory.
pub const DEFAULT_ASSETS_PATH: &str = "./web/app/assets";
/// Default location of the generated `manifest.json`.
pub const DEFAULT_MANIFEST_PATH: &str = "./web/app/dist/manifest.json";

/// Options for a [`Vite`](crate::Vite) instance.
///
/// Every string field treats an empty value as "use the default", so a partially
/// filled value (or a JSON document with only a few keys) can be passed to
/// [`Config::resolve`] to obtain a complete configuration.
///
/// JSON keys use the PascalCase option names, e.g.:
/// `{ "DevServerEnabled": true, "DevServerPort": "5173" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Run in development mode: emit the Vite client script and point asset
    /// tags at the dev server. When false the client tag is empty and assets
    /// are resolved through the manifest.
    pub dev_server_enabled: bool,

    /// Protocol of the Vite dev server (default: "http").
    #[validate(min_length = 1)]
    pub dev_server_protocol: String,

    /// Host of the Vite dev server (default: "localhost").
    #[validate(min_length = 1)]
    pub dev_server_host: String,

    /// Port of the Vite dev server (default: "3001"). Digits only.
    #[validate(pattern = r"^[0-9]{1,5}$")]
    pub dev_server_port: String,

    /// Browser path of the Vite client script (default: "@vite/client").
    #[validate(min_length = 1)]
    pub web_socket_client_url: String,

    /// Source assets directory (default: "./web/app/assets").
    /// Informational only; no tag generation reads it.
    #[validate(min_length = 1)]
    pub assets_path: String,

    /// Path of the generated Vite manifest (default: "./web/app/dist/manifest.json").
    #[validate(min_length = 1)]
    pub manifest_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev_server_enabled: false,
            dev_server_protocol: DEFAULT_DEV_SERVER_PROTOCOL.to_string(),
            dev_server_host: DEFAULT_DEV_SERVER_HOST.to_string(),
            dev_server_port: DEFAULT_DEV_SERVER_PORT.to_string(),
            web_socket_client_url: DEFAULT_WEB_SOCKET_CLIENT_URL.to_string(),
            assets_path: DEFAULT_ASSETS_PATH.to_string(),
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
        }
    }
}

impl Config {
    /// Fill every empty string field with its default.
    ///
    /// `dev_server_enabled` is kept as given: `false` is a valid explicit choice.
    pub fn resolve(self) -> Self {
        let defaults = Self::default();
        Self {
            dev_server_enabled: self.dev_server_enabled,
            dev_server_protocol: or_default(
                self.dev_server_protocol,
                defaults.dev_server_protocol,
            ),
            dev_server_host: or_default(self.dev_server_host, defaults.dev_server_host),
            dev_server_port: or_default(self.dev_server_port, defaults.dev_server_port),
            web_socket_client_url: or_default(
                self.web_socket_client_url,
                defaults.web_socket_client_url,
            ),
            assets_path: or_default(self.assets_path, defaults.assets_path),
            manifest_path: or_default(self.manifest_path, defaults.manifest_path),
        }
    }

    /// Base URL of the dev server, without a trailing slash
    /// (e.g. `http://localhost:3001`).
    pub fn dev_server_origin(&self) -> String {
        format!(
            "{}://{}:{}",
            self.dev_server_protocol, self.dev_server_host, self.dev_server_port
        )
    }

    /// URL of `path` on the dev server: `{protocol}://{host}:{port}/{path}`.
    pub fn dev_server_url(&self, path: &str) -> String {
        format!("{}/{}", self.dev_server_origin(), path)
    }
}

/// Resolve an optional, possibly partial configuration against the defaults.
///
/// `None` yields [`Config::default`].
pub fn resolve(config: Option<Config>) -> Config {
    config.map(Config::resolve).unwrap_or_default()
}

fn or_default(value: String, default: String) -> String {
    if value.is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Config {
        Config {
            dev_server_enabled: false,
            dev_server_protocol: String::new(),
            dev_server_host: String::new(),
            dev_server_port: String::new(),
            web_socket_client_url: String::new(),
            assets_path: String::new(),
            manifest_path: String::new(),
        }
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let cfg = resolve(None);
        assert!(!cfg.dev_server_enabled);
        assert_eq!(cfg.dev_server_protocol, "http");
        assert_eq!(cfg.dev_server_host, "localhost");
        assert_eq!(cfg.dev_server_port, "3001");
        assert_eq!(cfg.web_socket_client_url, "@vite/client");
        assert_eq!(cfg.assets_path, "./web/app/assets");
        assert_eq!(cfg.manifest_path, "./web/app/dist/manifest.json");
    }

    #[test]
    fn test_empty_fields_resolve_to_defaults() {
        assert_eq!(resolve(Some(empty())), Config::default());
    }

    #[test]
    fn test_options_merging_keeps_given_values() {
        let cfg = resolve(Some(Config {
            dev_server_enabled: true,
            dev_server_protocol: "https".into(),
            dev_server_host: String::new(),
            ..empty()
        }));

        assert!(cfg.dev_server_enabled);
        assert_eq!(cfg.dev_server_protocol, "https");
        assert_eq!(cfg.dev_server_host, "localhost");
        assert_eq!(cfg.manifest_path, DEFAULT_MANIFEST_PATH);
    }

    #[test]
    fn test_every_non_empty_field_is_preserved() {
        let given = Config {
            dev_server_enabled: true,
            dev_server_protocol: "https".into(),
            dev_server_host: "vite.internal".into(),
            dev_server_port: "5173".into(),
            web_socket_client_url: "static/@vite/client".into(),
            assets_path: "assets".into(),
            manifest_path: "dist/.vite/manifest.json".into(),
        };
        assert_eq!(resolve(Some(given.clone())), given);
    }

    #[test]
    fn test_resolved_config_passes_validation() {
        assert!(resolve(Some(empty())).validate().is_ok());
        assert!(empty().validate().is_err());
    }

    #[test]
    fn test_port_must_be_digits() {
        let cfg = Config {
            dev_server_port: "30o1".into(),
            ..Default::default()
        };
        assert!(cfg.resolve().validate().is_err());
    }

    #[test]
    fn test_dev_server_url() {
        let cfg = Config::default();
        assert_eq!(cfg.dev_server_origin(), "http://localhost:3001");
        assert_eq!(
            cfg.dev_server_url("@vite/client"),
            "http://localhost:3001/@vite/client"
        );
    }

    #[test]
    fn test_deserialize_uses_option_names() {
        let cfg: Config = serde_json::from_str(
            r#"{ "DevServerEnabled": true, "WebSocketClientUrl": "", "DevServerPort": "5173" }"#,
        )
        .unwrap();
        let cfg = cfg.resolve();
        assert!(cfg.dev_server_enabled);
        assert_eq!(cfg.dev_server_port, "5173");
        assert_eq!(cfg.web_socket_client_url, DEFAULT_WEB_SOCKET_CLIENT_URL);
        assert_eq!(cfg.dev_server_host, DEFAULT_DEV_SERVER_HOST);
    }
}
