use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use paywallets_client::{
    client::PaymentsClient,
    config::ApiConfig,
    error::PaymentsClientError,
    http::CrossPlatformHttpClient,
    store::{FetchOutcome, FetchStatus, WalletStore},
};
use paywallets_core::primitives::{PostWalletsByPlatformRequest, Wallet};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

async fn wallets_by_platform(Json(request): Json<PostWalletsByPlatformRequest>) -> Response {
    match request.token.as_str() {
        "valid" => Json(json!([
            {"id": request.platform_id, "name": "Main", "currency": "USD"},
            {"id": request.platform_id + 1, "name": "Bonus", "currency": "USD"}
        ]))
        .into_response(),
        "invalid" => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"statusCode": 401, "message": "Invalid token", "error": "Unauthorized"})),
        )
            .into_response(),
        "malformed" => Json(json!({"wallets": []})).into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
    }
}

/// Starts a payments api stub on a random port and returns its base url.
async fn start_payments_api() -> anyhow::Result<Url> {
    let app = Router::new().route("/api/wallets/by-plataform", post(wallets_by_platform));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("payments api stub failed");
    });
    Ok(Url::parse(&format!("http://{addr}/api"))?)
}

async fn create_client() -> anyhow::Result<CrossPlatformHttpClient> {
    let config = ApiConfig::new(start_payments_api().await?);
    Ok(CrossPlatformHttpClient::from_config(&config))
}

#[tokio::test]
async fn test_post_wallets_by_platform() -> anyhow::Result<()> {
    let client = create_client().await?;
    let wallets = client
        .post_wallets_by_platform(PostWalletsByPlatformRequest {
            platform_id: 40,
            token: "valid".to_owned(),
        })
        .await?;

    assert_eq!(2, wallets.len());
    assert_eq!(40, wallets[0].id);
    assert_eq!("Main", wallets[0].name);
    assert_eq!(Some(&json!("USD")), wallets[0].field("currency"));
    assert_eq!(41, wallets[1].id);
    Ok(())
}

#[tokio::test]
async fn test_post_wallets_by_platform_error_body() -> anyhow::Result<()> {
    let client = create_client().await?;
    let result = client
        .post_wallets_by_platform(PostWalletsByPlatformRequest {
            platform_id: 1,
            token: "invalid".to_owned(),
        })
        .await;

    let err = result.expect_err("request should fail");
    assert!(matches!(err, PaymentsClientError::Api { status: 401, .. }));
    assert_eq!(Some("Invalid token".to_owned()), err.response_message());
    Ok(())
}

#[tokio::test]
async fn test_post_wallets_by_platform_malformed_payload() -> anyhow::Result<()> {
    let client = create_client().await?;
    let result = client
        .post_wallets_by_platform(PostWalletsByPlatformRequest {
            platform_id: 1,
            token: "malformed".to_owned(),
        })
        .await;

    assert!(matches!(
        result,
        Err(PaymentsClientError::UnexpectedResponse(body)) if body == r#"{"wallets":[]}"#
    ));
    Ok(())
}

#[tokio::test]
async fn test_store_fetches_wallets_over_http() -> anyhow::Result<()> {
    let store = WalletStore::new(create_client().await?);
    store.set_auth(5, "valid").await;

    assert_eq!(FetchOutcome::Applied, store.fetch_wallets().await?);

    let state = store.snapshot().await;
    assert_eq!(FetchStatus::Success, state.status);
    assert_eq!(None, state.error);
    assert_eq!(
        vec![5, 6],
        state.wallets.iter().map(|w| w.id).collect::<Vec<_>>()
    );
    Ok(())
}

#[tokio::test]
async fn test_store_records_backend_message() -> anyhow::Result<()> {
    let store = WalletStore::new(create_client().await?);
    store.set_auth(5, "valid").await;
    store.fetch_wallets().await?;
    let loaded: Vec<Wallet> = store.wallets().await;

    store.set_auth(5, "invalid").await;
    assert!(store.fetch_wallets().await.is_err());

    let state = store.snapshot().await;
    assert_eq!(Some("Invalid token".to_owned()), state.error);
    assert!(!state.is_loading());
    assert_eq!(loaded, state.wallets);
    Ok(())
}

#[tokio::test]
async fn test_store_falls_back_to_status_text() -> anyhow::Result<()> {
    let store = WalletStore::new(create_client().await?);
    store.set_auth(5, "boom").await;

    assert!(store.fetch_wallets().await.is_err());
    assert_eq!(
        Some("Request failed with status code 500".to_owned()),
        store.error().await
    );
    Ok(())
}

#[tokio::test]
async fn test_store_rejects_malformed_payload() -> anyhow::Result<()> {
    let store = WalletStore::new(create_client().await?);
    store.set_auth(5, "malformed").await;

    let result = store.fetch_wallets().await;

    assert!(matches!(
        result,
        Err(PaymentsClientError::UnexpectedResponse(_))
    ));
    let state = store.snapshot().await;
    assert!(state.wallets.is_empty());
    assert_eq!(FetchStatus::Failed, state.status);
    assert_eq!(
        Some(r#"UnexpectedResponse - {"wallets":[]}"#.to_owned()),
        state.error
    );
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_uses_failure_text() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = ApiConfig::new(Url::parse(&format!("http://{addr}/api/"))?);
    let store = WalletStore::new(CrossPlatformHttpClient::from_config(&config));
    store.set_auth(1, "valid").await;

    let result = store.fetch_wallets().await;

    assert!(matches!(result, Err(PaymentsClientError::Reqwest(_))));
    let error = store.error().await.expect("error should be recorded");
    assert!(error.starts_with("ReqwestError - "));
    Ok(())
}
