//! # Client configuration — `yummly.toml`
//!
//! Where the REST API lives and how the client behaves. The browser bundle has no
//! process environment, so the API base is taken from the build-time variable
//! `YUMMLY_API_BASE`, then the page origin, then a localhost default. Native
//! builds may also load a TOML file with the same shape.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"              # no trailing slash
//! uploads_url = "http://localhost:8080/uploads"   # where post media is served
//!
//! [chat]
//! poll_interval_secs = 5
//! ```
//!
//! All structs derive `Default` so a missing file or section is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Fallback API host when neither the build environment nor the page origin
/// provides one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix) every resource path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base for uploaded post media (`<uploads_url>/<imagePath>`).
    #[serde(default = "default_uploads_url")]
    pub uploads_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_uploads_url() -> String {
    format!("{DEFAULT_API_BASE}/uploads")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            uploads_url: default_uploads_url(),
        }
    }
}

/// Group chat behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Seconds between message list refreshes.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    5
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`, with uploads served from `<base_url>/uploads`.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            api: ApiConfig {
                uploads_url: format!("{base}/uploads"),
                base_url: base,
            },
            chat: ChatConfig::default(),
        }
    }

    /// Builder method to set the chat poll interval.
    pub fn with_poll_interval(mut self, secs: u64) -> Self {
        self.chat.poll_interval_secs = secs;
        self
    }

    /// Resolve the API location: `YUMMLY_API_BASE` at build time, else `origin`
    /// (the page origin on web), else [`DEFAULT_API_BASE`].
    pub fn from_env(origin: Option<&str>) -> Self {
        Self::resolve(option_env!("YUMMLY_API_BASE"), origin)
    }

    fn resolve(build_env: Option<&str>, origin: Option<&str>) -> Self {
        let base = build_env
            .filter(|s| !s.trim().is_empty())
            .or(origin.filter(|s| !s.trim().is_empty()))
            .unwrap_or(DEFAULT_API_BASE);
        Self::new(base)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "yummly.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        config.api.uploads_url = config.api.uploads_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.uploads_url, "http://localhost:8080/uploads");
        assert_eq!(config.chat.poll_interval_secs, 5);
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("https://yummly.example/");
        assert_eq!(config.api.base_url, "https://yummly.example");
        assert_eq!(config.api.uploads_url, "https://yummly.example/uploads");
    }

    #[test]
    fn test_resolve_precedence() {
        let from_build = ClientConfig::resolve(Some("https://api.example"), Some("https://page.example"));
        assert_eq!(from_build.api.base_url, "https://api.example");

        let from_origin = ClientConfig::resolve(None, Some("https://page.example"));
        assert_eq!(from_origin.api.base_url, "https://page.example");

        let blank_build = ClientConfig::resolve(Some("  "), None);
        assert_eq!(blank_build.api.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClientConfig::from_toml("[chat]\npoll_interval_secs = 10\n").unwrap();
        assert_eq!(config.chat.poll_interval_secs, 10);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);

        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://x.example/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://x.example");
        assert_eq!(config.api.uploads_url, default_uploads_url());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://x.example").with_poll_interval(2);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
