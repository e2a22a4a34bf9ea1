//! The HTTP seam between the client and the network.

use bytes::Bytes;
use http::HeaderMap;
use url::Url;

/// Sends one signed request body and returns the raw response body.
///
/// Implementations must not inspect the HTTP status: the gateway reports
/// failures inside the response envelope, so every body goes to the normalizer.
pub trait Transport {
    type Error: std::error::Error;

    fn post(
        &self,
        url: Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> impl Future<Output = Result<Bytes, Self::Error>>;
}

#[cfg(feature = "http-client")]
pub use http_client::HttpTransport;

#[cfg(feature = "http-client")]
mod http_client {
    use std::time::Duration;

    use super::*;

    /// [`Transport`] backed by `reqwest`.
    #[derive(Debug, Clone, Default)]
    pub struct HttpTransport {
        pub client: reqwest::Client,
    }

    impl HttpTransport {
        pub fn new() -> Self {
            HttpTransport::default()
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            HttpTransport { client }
        }

        /// Builds a client whose requests time out after `timeout`.
        pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(HttpTransport { client })
        }
    }

    impl Transport for HttpTransport {
        type Error = reqwest::Error;

        async fn post(&self, url: Url, headers: HeaderMap, body: Bytes) -> Result<Bytes, Self::Error> {
            let response = self
                .client
                .post(url)
                .headers(headers)
                .body(body)
                .send()
                .await?;

            #[cfg(feature = "tracing")]
            tracing::debug!("Gateway responded with HTTP {}", response.status());

            response.bytes().await
        }
    }
}
