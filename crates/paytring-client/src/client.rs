use bytes::Bytes;
use paytring_core::{
    request::{
        CreateOrder, CurrencyConversion, FetchOrder, FetchOrderByReceipt, FetchRefund,
        FetchRefundAttempts, GatewayRequest, PartialRefund, ProcessPayment, RefundOrder,
        ValidateCardBin, ValidateVpa,
    },
    response::{Envelope, normalize},
    types::AmountValue,
};

use crate::{config::ClientConfig, errors::ClientError, transport::Transport};

#[cfg(feature = "http-client")]
use crate::transport::HttpTransport;

pub type ClientResult<T, E> = Result<T, ClientError<E>>;

/// Paytring API client.
///
/// Each call builds the request body, signs it, sends it once through the
/// transport and normalizes the response envelope. Nothing is retried.
#[derive(Debug, Clone)]
pub struct PaytringClient<T> {
    pub config: ClientConfig,
    pub transport: T,
}

#[cfg(feature = "http-client")]
impl PaytringClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        PaytringClient::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> PaytringClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        PaytringClient { config, transport }
    }

    /// Signs and sends any gateway request.
    ///
    /// Validation failures are returned before the transport is touched.
    pub async fn send<R: GatewayRequest>(&self, request: &R) -> ClientResult<Envelope, T::Error> {
        let endpoint = R::ENDPOINT;
        let signed = request.sign(&self.config.credentials)?;
        let body = Bytes::from(signed.to_body()?);
        let url = self.config.endpoint_url(endpoint)?;
        let headers = self.config.headers()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Dispatching request to {}", endpoint.path());

        let raw = self
            .transport
            .post(url, headers, body)
            .await
            .map_err(ClientError::Transport)?;

        match normalize(&raw) {
            Ok(envelope) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Request to {} succeeded", endpoint.path());
                Ok(envelope)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Request to {} failed: {}", endpoint.path(), err);
                Err(err.into())
            }
        }
    }

    pub async fn create_order(&self, order: &CreateOrder) -> ClientResult<Envelope, T::Error> {
        self.send(order).await
    }

    pub async fn fetch_order(&self, order_id: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&FetchOrder::new(order_id)).await
    }

    pub async fn fetch_order_by_receipt(
        &self,
        receipt_id: &str,
    ) -> ClientResult<Envelope, T::Error> {
        self.send(&FetchOrderByReceipt::new(receipt_id)).await
    }

    pub async fn process_payment(
        &self,
        payment: &ProcessPayment,
    ) -> ClientResult<Envelope, T::Error> {
        self.send(payment).await
    }

    /// Refunds the full order amount.
    pub async fn refund_order(&self, order_id: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&RefundOrder::new(order_id)).await
    }

    /// Fetches a refund, including its current status.
    pub async fn fetch_refund(&self, refund_id: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&FetchRefund::new(refund_id)).await
    }

    pub async fn partial_refund(
        &self,
        order_id: &str,
        amount: impl Into<AmountValue>,
    ) -> ClientResult<Envelope, T::Error> {
        self.send(&PartialRefund::new(order_id, amount)).await
    }

    pub async fn fetch_refund_attempts(&self, order_id: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&FetchRefundAttempts::new(order_id)).await
    }

    pub async fn validate_vpa(&self, vpa: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&ValidateVpa::new(vpa)).await
    }

    /// Looks up the issuer details of a card BIN.
    pub async fn validate_card(&self, bin: &str) -> ClientResult<Envelope, T::Error> {
        self.send(&ValidateCardBin::new(bin)).await
    }

    pub async fn currency_conversion(
        &self,
        from: &str,
        to: &str,
    ) -> ClientResult<Envelope, T::Error> {
        self.send(&CurrencyConversion::new(from, to)).await
    }
}
