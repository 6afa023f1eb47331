//! API services and client configuration in Dioxus context.

use api::Services;
use dioxus::prelude::*;
use store::ClientConfig;

/// Resolve the client configuration for this platform.
///
/// Web: `YUMMLY_API_BASE` at build time, else the page origin. Native: a
/// `yummly.toml` in the user config directory when present, else the same
/// build-time/default chain.
pub fn load_client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        ClientConfig::from_env(origin.as_deref())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match read_config_file() {
            Some(config) => config,
            None => ClientConfig::from_env(None),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ClientConfig> {
    let path = dirs::config_dir()?
        .join("yummly")
        .join(ClientConfig::filename());
    let text = std::fs::read_to_string(&path).ok()?;
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides [`ClientConfig`] and [`Services`] to `children`.
#[component]
pub fn ServicesProvider(children: Element) -> Element {
    let config = use_hook(load_client_config);
    let services = use_hook({
        let config = config.clone();
        move || Services::new(&config)
    });

    use_context_provider(|| config);
    use_context_provider(|| services);

    rsx! {
        {children}
    }
}
