use clap::Parser;
use url::Url;

/// Fallback used when `PAYWALLETS_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://payments-test.jbets.online/api/";

#[derive(Debug, Clone, Parser)]
pub struct ApiConfig {
    #[clap(long, default_value = DEFAULT_API_BASE_URL, env = "PAYWALLETS_API_BASE_URL")]
    pub api_base_url: Url,
}

impl ApiConfig {
    pub fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }

    /// The base url with a trailing slash, so that relative endpoint paths are
    /// joined below it instead of replacing its last segment.
    pub fn base_url(&self) -> Url {
        let mut url = self.api_base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("invalid default api base url"),
        }
    }
}
