use paywallets_client::{config::ApiConfig, http::CrossPlatformHttpClient, store::WalletStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = CrossPlatformHttpClient::from_config(&ApiConfig::default());
    let store = WalletStore::new(client);
    store.set_auth(1, "my-platform-token").await;

    if let Err(e) = store.fetch_wallets().await {
        println!("fetch failed: {}", e.user_message());
    }

    for wallet in store.wallets().await {
        println!("{} {}", wallet.id, wallet.name);
    }
    Ok(())
}
