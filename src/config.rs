//! Configuration for the recipe search API.
//!
//! Credentials are never hardcoded: an [`ApiConfig`] is built by the host and
//! injected into the client at construction time.

use std::env;
use std::fmt;
use std::time::Duration;

/// Default Edamam host.
pub const DEFAULT_BASE_URL: &str = "https://api.edamam.com";

/// Only public recipes are requested.
pub const DEFAULT_RECIPE_TYPE: &str = "public";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Static credentials and endpoint settings for the recipe search API.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.edamam.com`
    pub base_url: String,
    /// Application id issued by the API provider
    pub app_id: String,
    /// Application key issued by the API provider
    pub app_key: String,
    /// Value of the `type` query parameter
    pub recipe_type: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
            recipe_type: DEFAULT_RECIPE_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from `EDAMAM_*` environment variables.
    ///
    /// `EDAMAM_APP_ID` and `EDAMAM_APP_KEY` are required. `EDAMAM_BASE_URL` and
    /// `EDAMAM_TIMEOUT_SECS` fall back to the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let app_id = env::var("EDAMAM_APP_ID")
            .map_err(|_| anyhow::anyhow!("EDAMAM_APP_ID must be set"))?;
        let app_key = env::var("EDAMAM_APP_KEY")
            .map_err(|_| anyhow::anyhow!("EDAMAM_APP_KEY must be set"))?;

        if app_id.trim().is_empty() || app_key.trim().is_empty() {
            anyhow::bail!("EDAMAM_APP_ID and EDAMAM_APP_KEY must not be empty");
        }

        let base_url =
            env::var("EDAMAM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("EDAMAM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("Invalid EDAMAM_TIMEOUT_SECS '{}': {}", raw, e)
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(app_id, app_key)
            .with_base_url(base_url)
            .with_timeout(timeout))
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .field("recipe_type", &self.recipe_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}
