#[cfg(not(target_arch = "wasm32"))]
pub mod reqwest;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use url::Url;

use crate::config::ApiConfig;

/// Shared http client bound to the payments api base url.
#[derive(Debug, Clone)]
pub struct CrossPlatformHttpClient {
    #[cfg(not(target_arch = "wasm32"))]
    client: ::reqwest::Client,
    base_url: Url,
}

impl CrossPlatformHttpClient {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}
