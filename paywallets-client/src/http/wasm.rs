use gloo_net::http::{Request, Response};
use paywallets_core::primitives::ApiErrorResponse;
use url::Url;

use super::CrossPlatformHttpClient;
use crate::error::PaymentsClientError;

impl CrossPlatformHttpClient {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub async fn do_post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<T, PaymentsClientError> {
        let resp = Request::post(url.as_str())
            .header("content-type", "application/json")
            .json(body)?
            .send()
            .await?;
        Self::extract_response_data::<T>(resp).await
    }

    async fn extract_response_data<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, PaymentsClientError> {
        let status = response.status();
        let response_text = response.text().await?;

        if response.ok() {
            serde_json::from_str::<T>(&response_text)
                .map_err(|_| PaymentsClientError::UnexpectedResponse(response_text))
        } else {
            let body = serde_json::from_str::<ApiErrorResponse>(&response_text).ok();
            Err(PaymentsClientError::Api { status, body })
        }
    }
}
