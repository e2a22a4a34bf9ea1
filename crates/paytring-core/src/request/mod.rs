//! Per-operation request builders.
//!
//! Every operation implements [`GatewayRequest`]: it assembles its body from the
//! required fields plus whatever optional parts were supplied, and the provided
//! [`GatewayRequest::sign`] turns that body into a [`SignedRequest`].

mod order;
mod payment;
mod refund;
mod validation;

use std::fmt::Debug;

pub use order::*;
pub use payment::*;
pub use refund::*;
pub use validation::*;

use crate::{
    errors::Result,
    signer::SignedRequest,
    types::Params,
};

/// Logical gateway endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CreateOrder,
    FetchOrder,
    FetchOrderByReceipt,
    ProcessPayment,
    RefundOrder,
    FetchRefund,
    PartialRefund,
    FetchRefundAttempts,
    ValidateVpa,
    ValidateCardBin,
    CurrencyConversion,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CreateOrder => "v2/order/create",
            Endpoint::FetchOrder => "v2/order/fetch",
            Endpoint::FetchOrderByReceipt => "v2/order/fetch/receipt",
            Endpoint::ProcessPayment => "v1/order/process",
            Endpoint::RefundOrder => "v2/order/refund",
            Endpoint::FetchRefund => "v2/order/refund/fetch",
            Endpoint::PartialRefund => "v2/order/refund/partial",
            Endpoint::FetchRefundAttempts => "v2/order/refund/attempts",
            Endpoint::ValidateVpa => "v1/info/vpa",
            Endpoint::ValidateCardBin => "v1/health/bin",
            Endpoint::CurrencyConversion => "v1/currency/get",
        }
    }
}

/// API key and shared secret issued to a merchant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// A request to one gateway endpoint.
pub trait GatewayRequest {
    /// The endpoint this request is sent to.
    const ENDPOINT: Endpoint;

    /// Assembles the unsigned body.
    ///
    /// Conditionally-required fields are checked here, before anything is serialized.
    fn to_params(&self, api_key: &str) -> Result<Params>;

    /// Assembles and signs the body.
    fn sign(&self, credentials: &Credentials) -> Result<SignedRequest> {
        let params = self.to_params(credentials.api_key())?;
        Ok(SignedRequest::sign(params, credentials.api_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("test_key", "test_secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("test_key"));
        assert!(!debug.contains("test_secret"));
    }
}
