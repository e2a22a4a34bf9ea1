use paytring_core::{errors::ValidationError, response::GatewayError};

/// Every way a client call can fail, generic over the transport's error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError<E> {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Transport error: {0}")]
    Transport(#[source] E),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    Header(#[from] http::header::InvalidHeaderValue),
}

impl<E> From<paytring_core::errors::Error> for ClientError<E> {
    fn from(err: paytring_core::errors::Error) -> Self {
        use paytring_core::errors::Error;

        match err {
            Error::Validation(err) => ClientError::Validation(err),
            Error::Encode(err) => ClientError::Encode(err),
            Error::Decode(err) => ClientError::Decode(err),
            Error::Gateway(err) => ClientError::Gateway(err),
        }
    }
}

impl<E> ClientError<E> {
    /// The gateway's message, if the gateway rejected the request.
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            ClientError::Gateway(err) => Some(&err.message),
            _ => None,
        }
    }
}
