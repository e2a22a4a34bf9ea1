use crate::response::GatewayError;

/// A conditionally-required field was missing, detected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("VPA is required for UPI collect")]
    MissingVpa,

    #[error("card number is required")]
    MissingCardNumber,

    #[error("expiry month is required")]
    MissingExpiryMonth,

    #[error("expiry year is required")]
    MissingExpiryYear,

    #[error("CVV is required")]
    MissingCvv,
}

/// Error types for Paytring core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pre-flight validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not a JSON object.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The gateway answered with `status: false`.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// A specialized `Result` type for Paytring core operations.
pub type Result<T> = std::result::Result<T, Error>;
