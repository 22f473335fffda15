//! Wallet store: auth context, the last fetched wallet list and the fetch state.
//!
//! The store is an explicit container owned by whoever composes the application.
//! Its fields sit behind an async mutex that is released before the network call,
//! so reads stay available while a fetch is in flight.
//!
//! Overlapping fetches are allowed. Every fetch takes a generation number and only
//! the response of the most recently issued fetch is applied to the state.

use paywallets_core::primitives::{PostWalletsByPlatformRequest, Wallet};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    client::PaymentsClient,
    error::{PaymentsClientError, MISSING_CREDENTIALS_MESSAGE},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub platform_id: Option<i64>,
    pub token: String,
}

impl AuthContext {
    /// Request body for the wallets query, `None` while the platform id or token is missing.
    pub fn credentials(&self) -> Option<PostWalletsByPlatformRequest> {
        match self.platform_id {
            Some(platform_id) if !self.token.is_empty() => Some(PostWalletsByPlatformRequest {
                platform_id,
                token: self.token.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletState {
    pub auth: AuthContext,
    pub wallets: Vec<Wallet>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl WalletState {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was written to the store.
    Applied,
    /// A newer fetch was issued while this one was in flight; its response was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    state: WalletState,
    generation: u64,
}

pub struct WalletStore<C: PaymentsClient> {
    client: C,
    inner: Mutex<Inner>,
}

impl<C: PaymentsClient> WalletStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn set_auth(&self, platform_id: i64, token: impl Into<String>) {
        let mut inner = self.inner.lock().await;
        inner.state.auth = AuthContext {
            platform_id: Some(platform_id),
            token: token.into(),
        };
    }

    pub async fn snapshot(&self) -> WalletState {
        self.inner.lock().await.state.clone()
    }

    pub async fn auth(&self) -> AuthContext {
        self.inner.lock().await.state.auth.clone()
    }

    pub async fn wallets(&self) -> Vec<Wallet> {
        self.inner.lock().await.state.wallets.clone()
    }

    pub async fn status(&self) -> FetchStatus {
        self.inner.lock().await.state.status
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.lock().await.state.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.state.is_loading()
    }

    /// Fetches the wallets for the current auth context and records the result.
    ///
    /// Failures are stored as a display message in the error field and also returned.
    /// Without a platform id and token no request is sent and the loading flag is untouched.
    #[instrument(skip(self))]
    pub async fn fetch_wallets(&self) -> Result<FetchOutcome, PaymentsClientError> {
        let (request, generation) = {
            let mut inner = self.inner.lock().await;
            let Some(request) = inner.state.auth.credentials() else {
                warn!("fetch_wallets called without platform id or token");
                inner.state.error = Some(MISSING_CREDENTIALS_MESSAGE.to_owned());
                if !inner.state.is_loading() {
                    inner.state.status = FetchStatus::Failed;
                }
                return Err(PaymentsClientError::MissingCredentials);
            };

            inner.generation += 1;
            inner.state.status = FetchStatus::Loading;
            inner.state.error = None;
            (request, inner.generation)
        };

        debug!(generation, platform_id = request.platform_id, "fetching wallets");
        let result = self.client.post_wallets_by_platform(request).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(
                generation,
                latest = inner.generation,
                ok = result.is_ok(),
                "discarding superseded wallets response"
            );
            return Ok(FetchOutcome::Superseded);
        }

        match result {
            Ok(wallets) => {
                info!("loaded {} wallets", wallets.len());
                inner.state.wallets = wallets;
                inner.state.status = FetchStatus::Success;
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                let message = err.user_message();
                error!("failed to fetch wallets: {message}");
                inner.state.error = Some(message);
                inner.state.status = FetchStatus::Failed;
                Err(err)
            }
        }
    }
}
