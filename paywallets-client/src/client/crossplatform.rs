use async_trait::async_trait;
use paywallets_core::primitives::{PostWalletsByPlatformRequest, Wallet};
use tracing::instrument;

use super::{PaymentsClient, WALLETS_BY_PLATFORM_PATH};
use crate::{error::PaymentsClientError, http::CrossPlatformHttpClient};

#[async_trait(?Send)]
impl PaymentsClient for CrossPlatformHttpClient {
    #[instrument(skip_all, fields(platform_id = request.platform_id), err)]
    async fn post_wallets_by_platform(
        &self,
        request: PostWalletsByPlatformRequest,
    ) -> Result<Vec<Wallet>, PaymentsClientError> {
        self.do_post(&self.endpoint(WALLETS_BY_PLATFORM_PATH)?, &request)
            .await
    }
}
