use async_trait::async_trait;
use paywallets_core::primitives::{PostWalletsByPlatformRequest, Wallet};

use crate::error::PaymentsClientError;

pub mod crossplatform;

#[cfg(test)]
use mockall::automock;

pub const WALLETS_BY_PLATFORM_PATH: &str = "wallets/by-plataform";

#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait PaymentsClient {
    async fn post_wallets_by_platform(
        &self,
        request: PostWalletsByPlatformRequest,
    ) -> Result<Vec<Wallet>, PaymentsClientError>;
}
