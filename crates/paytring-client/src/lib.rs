//! # Paytring Client
//!
//! An async client for the Paytring payment gateway, built on [`paytring_core`].
//!
//! - **[`config`]**: Credentials, base URL and request headers.
//! - **[`transport`]**: The HTTP seam; [`transport::HttpTransport`] uses `reqwest`
//!   (feature `http-client`, on by default).
//! - **[`client`]**: [`client::PaytringClient`], one async method per gateway operation.
//! - **[`errors`]**: [`errors::ClientError`], every way a call can fail.
//!
//! ```no_run
//! use paytring_client::{
//!     client::PaytringClient,
//!     config::ClientConfig,
//!     paytring_core::{fragments::Customer, request::{CreateOrder, Credentials}},
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PaytringClient::new(
//!     ClientConfig::builder()
//!         .credentials(Credentials::new("test_key", "test_secret"))
//!         .build(),
//! );
//!
//! let order = CreateOrder::builder()
//!     .amount(1000u64)
//!     .receipt_id("TEST0001")
//!     .callback_url("https://example.com/callback")
//!     .customer(Customer::builder().name("John Doe").email("john@example.com").phone("1234567890").build())
//!     .build();
//!
//! let created = client.create_order(&order).await?;
//! println!("order id: {:?}", created.get_str("order_id"));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod transport;

pub use paytring_core;
