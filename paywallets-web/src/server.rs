use std::sync::Arc;

use axum::{extract::State, http::Uri, response::Html, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::{config::ServerConfig, error::WebError, routes::RouteTable};

pub async fn run_server(table: RouteTable, config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    info!("listening on: {}", &config.host_port);
    for route in table.routes() {
        info!("route {} -> {}", route.path, route.view);
    }

    let listener = tokio::net::TcpListener::bind(&config.host_port).await?;

    axum::serve(
        listener,
        app(table)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_headers(Any)
                    .allow_methods(Any),
            )
            .into_make_service(),
    )
    .await?;

    Ok(())
}

/// Mounts every route of the table. Unregistered paths get axum's default 404.
pub fn app(table: RouteTable) -> Router {
    let table = Arc::new(table);
    table
        .routes()
        .iter()
        .fold(Router::<Arc<RouteTable>>::new(), |router, route| {
            router.route(route.path, get(render_view))
        })
        .with_state(table)
        .layer(TraceLayer::new_for_http())
}

#[instrument(name = "render_view", skip(table), err)]
async fn render_view(
    State(table): State<Arc<RouteTable>>,
    uri: Uri,
) -> Result<Html<&'static str>, WebError> {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let context = table
        .resolve(target)
        .ok_or_else(|| WebError::RouteNotFound(uri.path().to_owned()))?;

    info!(view = %context.view, query = ?context.query, "rendering view");
    Ok(Html(context.view.placeholder()))
}
