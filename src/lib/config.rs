//! Build-time configuration for the backend endpoints with an optional runtime
//! override. The runtime config is read from `window.SHORTLINK_CONFIG` (if
//! present) so the same bundle can be served from staging and production.
//! Configuration values are public; do not store secrets here.

const DEFAULT_CREATE_PATH: &str = "/shortlink";
const DEFAULT_PUBLIC_BASE_URL: &str = "https://n8n.to";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the shortlink API. Empty means same origin as the page.
    pub api_base_url: String,
    /// Path the shortener form submits to.
    pub create_path: String,
    /// Origin shown to users in front of a freshly created slug.
    pub public_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        let api_base_url = option_env!("SHORTLINK_API_BASE_URL").unwrap_or("");
        let create_path = option_env!("SHORTLINK_CREATE_PATH")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_CREATE_PATH.to_string());
        let public_base_url = option_env!("SHORTLINK_PUBLIC_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim().to_string(),
            create_path,
            public_base_url,
        }
    }

    /// Full shortlink shown to the user for a slug returned by the backend.
    pub fn shortlink_url(&self, slug: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim().trim_end_matches('/'),
            slug.trim_start_matches('/')
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            create_path: DEFAULT_CREATE_PATH.to_string(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    create_path: Option<String>,
    public_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.create_path {
        config.create_path = value;
    }
    if let Some(value) = runtime.public_base_url {
        config.public_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SHORTLINK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        create_path: read_runtime_value(&object, "create_path"),
        public_base_url: read_runtime_value(&object, "public_base_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            create_path: "/shortlink".to_string(),
            public_base_url: "https://n8n.to".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://n8n.to "),
            Some("https://n8n.to".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            create_path: normalize_runtime_value("  "),
            public_base_url: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            create_path: normalize_runtime_value("/v2/shortlink"),
            public_base_url: normalize_runtime_value("https://short.example"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.create_path, "/v2/shortlink");
        assert_eq!(config.public_base_url, "https://short.example");
    }

    #[test]
    fn shortlink_url_joins_base_and_slug() {
        let config = AppConfig::default();
        assert_eq!(config.shortlink_url("abcd"), "https://n8n.to/abcd");

        let trailing = AppConfig {
            public_base_url: "https://short.example/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(trailing.shortlink_url("/my-flow"), "https://short.example/my-flow");
    }
}
