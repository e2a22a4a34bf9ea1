use base64::{Engine, prelude::BASE64_STANDARD};
use bon::Builder;
use http::{
    HeaderMap, HeaderValue,
    header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};
use paytring_core::request::{Credentials, Endpoint};
use url::Url;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.paytring.com/api/";

pub const DEFAULT_USER_AGENT: &str = "paytring-rust-sdk/0";

/// Client configuration.
#[derive(Builder, Debug, Clone)]
pub struct ClientConfig {
    /// Merchant credentials, used both to sign bodies and to authenticate.
    pub credentials: Credentials,
    /// API base URL; [`DEFAULT_BASE_URL`] when unset.
    pub base_url: Option<Url>,
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
}

impl ClientConfig {
    /// Full URL of `endpoint`.
    ///
    /// A base URL without a trailing `/` is treated as a directory, so its last
    /// path segment is kept.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        let mut base = match &self.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(endpoint.path())
    }

    /// `Authorization` value: `Basic base64(key:secret)`.
    pub fn basic_auth(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.credentials.api_key(),
            self.credentials.api_secret()
        );
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> Result<HeaderMap, http::header::InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&self.basic_auth())?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .credentials(Credentials::new("test_key", "test_secret"))
            .build()
    }

    #[test]
    fn test_default_endpoint_urls() {
        let config = config();
        assert_eq!(
            config.endpoint_url(Endpoint::CreateOrder).unwrap().as_str(),
            "https://api.paytring.com/api/v2/order/create"
        );
        assert_eq!(
            config.endpoint_url(Endpoint::ValidateVpa).unwrap().as_str(),
            "https://api.paytring.com/api/v1/info/vpa"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let config = ClientConfig::builder()
            .credentials(Credentials::new("k", "s"))
            .base_url(Url::parse("http://localhost:8080/api/").unwrap())
            .user_agent("my-shop/1.0")
            .build();
        assert_eq!(
            config.endpoint_url(Endpoint::FetchRefund).unwrap().as_str(),
            "http://localhost:8080/api/v2/order/refund/fetch"
        );
        assert_eq!(config.headers().unwrap()[USER_AGENT], "my-shop/1.0");
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let config = ClientConfig::builder()
            .credentials(Credentials::new("k", "s"))
            .base_url(Url::parse("https://host/api").unwrap())
            .build();
        assert_eq!(
            config.endpoint_url(Endpoint::CreateOrder).unwrap().as_str(),
            "https://host/api/v2/order/create"
        );
    }

    #[test]
    fn test_headers() {
        let headers = config().headers().unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        // base64("test_key:test_secret")
        assert_eq!(
            headers[AUTHORIZATION],
            "Basic dGVzdF9rZXk6dGVzdF9zZWNyZXQ="
        );
        assert!(headers[AUTHORIZATION].is_sensitive());
    }
}
