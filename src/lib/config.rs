//! Build-time configuration for the hosted backend project with an optional
//! runtime override. The runtime config is read from `window.HUNT_CONFIG` (if
//! present) so static deployments can repoint the backend project without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Default identity (auth) REST endpoint base.
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
/// Default document-store REST endpoint base.
const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub project_id: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_key = option_env!("HUNT_API_KEY").unwrap_or("");
        let project_id = option_env!("HUNT_PROJECT_ID").unwrap_or("");
        let identity_base_url =
            option_env!("HUNT_IDENTITY_BASE_URL").unwrap_or(DEFAULT_IDENTITY_BASE_URL);
        let firestore_base_url =
            option_env!("HUNT_FIRESTORE_BASE_URL").unwrap_or(DEFAULT_FIRESTORE_BASE_URL);

        let mut config = Self {
            api_key: api_key.to_string(),
            project_id: project_id.to_string(),
            identity_base_url: identity_base_url.to_string(),
            firestore_base_url: firestore_base_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Builds an identity endpoint URL, e.g. `accounts:signUp` keyed by the
    /// project API key.
    pub fn identity_endpoint(&self, method: &str) -> String {
        let base = self.identity_base_url.trim().trim_end_matches('/');
        format!("{base}/accounts:{method}?key={key}", key = self.api_key)
    }

    /// Builds the REST URL of a document in the given collection, keyed by the
    /// opaque account id.
    pub fn document_url(&self, collection: &str, id: &str) -> String {
        let base = self.firestore_base_url.trim().trim_end_matches('/');
        format!(
            "{base}/projects/{project}/databases/(default)/documents/{collection}/{id}",
            project = self.project_id,
        )
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_key: Option<String>,
    project_id: Option<String>,
    identity_base_url: Option<String>,
    firestore_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_key {
        config.api_key = value;
    }
    if let Some(value) = runtime.project_id {
        config.project_id = value;
    }
    if let Some(value) = runtime.identity_base_url {
        config.identity_base_url = value;
    }
    if let Some(value) = runtime.firestore_base_url {
        config.firestore_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HUNT_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_key: read_runtime_value(&object, "api_key"),
        project_id: read_runtime_value(&object, "project_id"),
        identity_base_url: read_runtime_value(&object, "identity_base_url"),
        firestore_base_url: read_runtime_value(&object, "firestore_base_url"),
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
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    fn config() -> AppConfig {
        AppConfig {
            api_key: "key-123".to_string(),
            project_id: "hunt-demo".to_string(),
            identity_base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            firestore_base_url: "https://firestore.googleapis.com/v1/".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  hunt-demo "),
            Some("hunt-demo".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = config();
        let runtime = RuntimeConfig {
            api_key: normalize_runtime_value(""),
            project_id: normalize_runtime_value("  "),
            identity_base_url: normalize_runtime_value(""),
            firestore_base_url: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.project_id, "hunt-demo");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = config();
        let runtime = RuntimeConfig {
            api_key: normalize_runtime_value("other-key"),
            project_id: normalize_runtime_value("other-project"),
            identity_base_url: normalize_runtime_value("https://auth.example"),
            firestore_base_url: normalize_runtime_value("https://docs.example"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_key, "other-key");
        assert_eq!(config.project_id, "other-project");
        assert_eq!(config.identity_base_url, "https://auth.example");
        assert_eq!(config.firestore_base_url, "https://docs.example");
    }

    #[test]
    fn identity_endpoint_is_keyed_by_api_key() {
        assert_eq!(
            config().identity_endpoint("signInWithPassword"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=key-123"
        );
    }

    #[test]
    fn document_url_addresses_collection_and_id() {
        // The trailing slash on the configured base must not double up.
        assert_eq!(
            config().document_url("sessions", "abc123"),
            "https://firestore.googleapis.com/v1/projects/hunt-demo/databases/(default)/documents/sessions/abc123"
        );
    }
}
