use paywallets_core::primitives::ApiErrorResponse;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Response,
};
use url::Url;

use super::CrossPlatformHttpClient;
use crate::error::PaymentsClientError;

impl CrossPlatformHttpClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn extract_response_data<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, PaymentsClientError> {
        let status = response.status();
        let response_text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&response_text)
                .map_err(|_| PaymentsClientError::UnexpectedResponse(response_text))
        } else {
            let body = serde_json::from_str::<ApiErrorResponse>(&response_text).ok();
            Err(PaymentsClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    pub async fn do_post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<T, PaymentsClientError> {
        let resp = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_str("application/json")?)
            .body(serde_json::to_string(body)?)
            .send()
            .await?;
        Self::extract_response_data::<T>(resp).await
    }
}
