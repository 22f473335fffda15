use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{event, Level};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("No route registered for {0}")]
    RouteNotFound(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        event!(Level::WARN, "error in route table: {:?}", self);

        let status = match self {
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "code": status.as_u16(),
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}
