//! Page configuration: bundled `roster.toml` plus a localStorage override
//! for the API base.

use activity_roster::ClientConfig;

const BUNDLED_CONFIG: &str = include_str!("../roster.toml");

/// localStorage key that overrides `[api] base_url`
const API_BASE_KEY: &str = "roster_api_base";

/// Load the bundled configuration, falling back to defaults when it fails
/// to parse, then resolve the API base.
pub fn load() -> ClientConfig {
    let mut config = match ClientConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("{}; using defaults", e).into());
            ClientConfig::default()
        }
    };
    config.api.base_url = api_base(&config.api.base_url);
    config
}

fn api_base(configured: &str) -> String {
    let Some(window) = web_sys::window() else {
        return configured.to_string();
    };

    let url = match window.local_storage() {
        Ok(Some(storage)) => match storage.get_item(API_BASE_KEY) {
            Ok(Some(url)) if !url.trim().is_empty() => url,
            _ => configured.to_string(),
        },
        _ => configured.to_string(),
    };

    let url = if url.is_empty() {
        window.location().origin().unwrap_or_default()
    } else {
        url
    };
    url.trim_end_matches('/').to_string()
}
