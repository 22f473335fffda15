use paywallets_core::primitives::ApiErrorResponse;
use thiserror::Error;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Falta plataformId o token";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

#[derive(Error, Debug)]
pub enum PaymentsClientError {
    #[cfg(target_arch = "wasm32")]
    #[error("GlooNetError - {0}")]
    GlooNet(#[from] gloo_net::Error),

    #[error("SerdeJsonError - {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("ReqwestError - {0}")]
    Reqwest(#[from] reqwest::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("InvalidHeaderValueError - {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URLParseError - {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed with status code {status}")]
    Api {
        status: u16,
        body: Option<ApiErrorResponse>,
    },

    #[error("UnexpectedResponse - {0}")]
    UnexpectedResponse(String),

    #[error("{}", MISSING_CREDENTIALS_MESSAGE)]
    MissingCredentials,
}

impl PaymentsClientError {
    /// Message carried in the backend's error body, if there was one.
    pub fn response_message(&self) -> Option<String> {
        match self {
            Self::Api {
                body: Some(body), ..
            } => body.message_text(),
            _ => None,
        }
    }

    /// The text shown to users for this failure.
    pub fn user_message(&self) -> String {
        derive_error_message(self.response_message(), Some(self.to_string()))
    }
}

/// Picks the backend's message first, then the failure's own text, then a fixed fallback.
/// Blank strings count as missing.
pub fn derive_error_message(
    response_message: Option<String>,
    failure_message: Option<String>,
) -> String {
    response_message
        .filter(|msg| !msg.trim().is_empty())
        .or_else(|| failure_message.filter(|msg| !msg.trim().is_empty()))
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_response_body() {
        let err = PaymentsClientError::Api {
            status: 401,
            body: Some(ApiErrorResponse::with_message("Invalid token")),
        };
        assert_eq!("Invalid token", err.user_message());
    }

    #[test]
    fn test_user_message_falls_back_to_failure_text() {
        let err = PaymentsClientError::Api {
            status: 502,
            body: None,
        };
        assert_eq!("Request failed with status code 502", err.user_message());

        let err = PaymentsClientError::Api {
            status: 500,
            body: Some(ApiErrorResponse::default()),
        };
        assert_eq!("Request failed with status code 500", err.user_message());
    }

    #[test]
    fn test_user_message_for_unexpected_response() {
        let err = PaymentsClientError::UnexpectedResponse("{\"id\":1}".to_owned());
        assert_eq!("UnexpectedResponse - {\"id\":1}", err.user_message());
    }

    #[test]
    fn test_missing_credentials_message() {
        assert_eq!(
            MISSING_CREDENTIALS_MESSAGE,
            PaymentsClientError::MissingCredentials.user_message()
        );
    }

    #[test]
    fn test_derive_error_message_priority() {
        assert_eq!(
            "from body",
            derive_error_message(Some("from body".to_owned()), Some("own".to_owned()))
        );
        assert_eq!("own", derive_error_message(None, Some("own".to_owned())));
        assert_eq!("own", derive_error_message(Some(" ".to_owned()), Some("own".to_owned())));
        assert_eq!(UNKNOWN_ERROR_MESSAGE, derive_error_message(None, None));
        assert_eq!(UNKNOWN_ERROR_MESSAGE, derive_error_message(None, Some(String::new())));
    }
}
