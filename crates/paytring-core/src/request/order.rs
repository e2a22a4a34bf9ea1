use bon::Builder;

use crate::{
    errors::Result,
    fragments::{
        Address, Customer, Notes, OptionalFragment, PaymentConfig, SplitSettlement, TpvAccount,
        attach, attach_list,
    },
    request::{Endpoint, GatewayRequest},
    types::{AmountValue, Params},
};

/// Creates a new order.
///
/// Optional fragments can be set through the builder or applied afterwards with
/// [`CreateOrder::with_fragment`]. Each fragment kind has a single slot, so
/// applying the same kind twice keeps the last one.
///
/// ```
/// use paytring_core::{
///     fragments::{Customer, Notes, PaymentConfig},
///     request::{CreateOrder, Credentials, GatewayRequest},
/// };
///
/// let order = CreateOrder::builder()
///     .amount(1000u64)
///     .receipt_id("TEST0001")
///     .callback_url("https://example.com/callback")
///     .customer(
///         Customer::builder()
///             .name("John Doe")
///             .email("john.doe@example.com")
///             .phone("1234567890")
///             .build(),
///     )
///     .payment_config(PaymentConfig::builder().currency("USD").build())
///     .build()
///     .with_fragment(Notes::builder().udf1("gift").build());
///
/// let signed = order.sign(&Credentials::new("test_key", "test_secret")).unwrap();
/// assert_eq!(signed.params()["amount"], "1000");
/// assert_eq!(signed.params()["currency"], "USD");
/// assert_eq!(signed.params()["notes"]["udf1"], "gift");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    #[builder(into)]
    pub amount: AmountValue,
    #[builder(into)]
    pub receipt_id: String,
    #[builder(into)]
    pub callback_url: String,
    pub customer: Customer,
    pub payment_config: Option<PaymentConfig>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub notes: Option<Notes>,
    pub split_settlement: Option<SplitSettlement>,
    pub tpv: Option<Vec<TpvAccount>>,
}

impl CreateOrder {
    /// Puts `fragment` into its slot, replacing any fragment of the same kind.
    pub fn with_fragment(mut self, fragment: impl Into<OptionalFragment>) -> Self {
        match fragment.into() {
            OptionalFragment::PaymentConfig(v) => self.payment_config = Some(v),
            OptionalFragment::BillingAddress(v) => self.billing_address = Some(v),
            OptionalFragment::ShippingAddress(v) => self.shipping_address = Some(v),
            OptionalFragment::Notes(v) => self.notes = Some(v),
            OptionalFragment::SplitSettlement(v) => self.split_settlement = Some(v),
            OptionalFragment::Tpv(v) => self.tpv = Some(v),
        }
        self
    }

    /// Applies fragments in order; later fragments of a kind win.
    pub fn with_fragments<I>(self, fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionalFragment>,
    {
        fragments
            .into_iter()
            .fold(self, |order, fragment| order.with_fragment(fragment))
    }
}

impl GatewayRequest for CreateOrder {
    const ENDPOINT: Endpoint = Endpoint::CreateOrder;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("receipt_id".to_string(), self.receipt_id.as_str().into());
        body.insert("amount".to_string(), self.amount.to_string().into());
        body.insert("cname".to_string(), self.customer.name.as_str().into());
        body.insert("phone".to_string(), self.customer.phone.as_str().into());
        body.insert("email".to_string(), self.customer.email.as_str().into());
        body.insert("callback_url".to_string(), self.callback_url.as_str().into());

        self.payment_config
            .clone()
            .unwrap_or_default()
            .merge_into(&mut body);

        if let Some(split) = &self.split_settlement {
            split.merge_into(&mut body)?;
        }
        if let Some(address) = &self.billing_address {
            attach(&mut body, "billing_address", address)?;
        }
        if let Some(address) = &self.shipping_address {
            attach(&mut body, "shipping_address", address)?;
        }
        if let Some(notes) = &self.notes {
            attach(&mut body, "notes", notes)?;
        }
        if let Some(accounts) = &self.tpv {
            attach_list(&mut body, "tpv", accounts)?;
        }

        Ok(body)
    }
}

/// Fetches an order by its gateway id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOrder {
    pub order_id: String,
}

impl FetchOrder {
    pub fn new(order_id: impl Into<String>) -> Self {
        FetchOrder {
            order_id: order_id.into(),
        }
    }
}

impl GatewayRequest for FetchOrder {
    const ENDPOINT: Endpoint = Endpoint::FetchOrder;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("id".to_string(), self.order_id.as_str().into());
        Ok(body)
    }
}

/// Fetches an order by the merchant's receipt id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOrderByReceipt {
    pub receipt_id: String,
}

impl FetchOrderByReceipt {
    pub fn new(receipt_id: impl Into<String>) -> Self {
        FetchOrderByReceipt {
            receipt_id: receipt_id.into(),
        }
    }
}

impl GatewayRequest for FetchOrderByReceipt {
    const ENDPOINT: Endpoint = Endpoint::FetchOrderByReceipt;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("id".to_string(), self.receipt_id.as_str().into());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        fragments::SplitRule,
        request::Credentials,
        signer::{HASH_KEY, sign},
        types::AnyJson,
    };

    use super::*;

    fn customer() -> Customer {
        Customer::builder()
            .name("John Doe")
            .email("john.doe@example.com")
            .phone("1234567890")
            .build()
    }

    fn order() -> CreateOrder {
        CreateOrder::builder()
            .amount(1000u64)
            .receipt_id("TEST123")
            .callback_url("https://example.com/callback")
            .customer(customer())
            .build()
    }

    #[test]
    fn test_minimal_order_body() {
        let params = order().to_params("test_key").unwrap();
        assert_eq!(
            AnyJson::Object(params),
            json!({
                "key": "test_key",
                "receipt_id": "TEST123",
                "amount": "1000",
                "cname": "John Doe",
                "phone": "1234567890",
                "email": "john.doe@example.com",
                "callback_url": "https://example.com/callback",
                "currency": "INR",
                "auto_capture": "false"
            })
        );
    }

    #[test]
    fn test_full_order_body() {
        let address = Address::builder()
            .firstname("John")
            .lastname("Doe")
            .line1("Address Line 1")
            .zipcode("123456")
            .build();

        let order = CreateOrder::builder()
            .amount(1000u64)
            .receipt_id("TEST0001")
            .callback_url("https://example.com/callback")
            .customer(customer())
            .payment_config(
                PaymentConfig::builder()
                    .currency("USD")
                    .pg("razorpay")
                    .auto_capture(true)
                    .build(),
            )
            .billing_address(address.clone())
            .shipping_address(address)
            .notes(Notes::builder().udf1("udf1").udf5("udf5").build())
            .split_settlement(
                SplitSettlement::builder()
                    .split_type("percent")
                    .rules(vec![SplitRule::builder().vendor_id("sub_merchant_id").amount(50).build()])
                    .build(),
            )
            .tpv(vec![
                TpvAccount::builder()
                    .account_number("9898989898")
                    .name("John Vick")
                    .ifsc("IFSC12345")
                    .build(),
            ])
            .build();

        let params = order.to_params("test_key").unwrap();

        assert_eq!(params["currency"], json!("USD"));
        assert_eq!(params["pg"], json!("razorpay"));
        assert_eq!(params["auto_capture"], json!("true"));
        assert_eq!(params["split_type"], json!("percent"));
        assert_eq!(
            params["split_settlement"],
            json!([{ "vendor_id": "sub_merchant_id", "amount": 50 }])
        );
        assert_eq!(
            params["billing_address"],
            json!({
                "firstname": "John",
                "lastname": "Doe",
                "line1": "Address Line 1",
                "zipcode": "123456"
            })
        );
        assert_eq!(params["shipping_address"], params["billing_address"]);
        assert_eq!(params["notes"], json!({ "udf1": "udf1", "udf5": "udf5" }));
        assert_eq!(
            params["tpv"],
            json!([{ "account_number": "9898989898", "name": "John Vick", "ifsc": "IFSC12345" }])
        );
    }

    #[test]
    fn test_nested_fragments_do_not_change_signature() {
        let plain = order().sign(&Credentials::new("test_key", "test_secret")).unwrap();
        let with_notes = order()
            .with_fragment(Notes::builder().udf1("x").build())
            .sign(&Credentials::new("test_key", "test_secret"))
            .unwrap();

        // Nested fragments are not strings, so they do not change the signature.
        assert_eq!(plain.hash(), with_notes.hash());

        let with_pg = order()
            .with_fragment(PaymentConfig::builder().pg("razorpay").build())
            .sign(&Credentials::new("test_key", "test_secret"))
            .unwrap();
        assert_ne!(plain.hash(), with_pg.hash());
    }

    #[test]
    fn test_same_fragment_kind_last_wins() {
        let order = order().with_fragments([
            OptionalFragment::BillingAddress(Address::builder().city("Pune").build()),
            OptionalFragment::Notes(Notes::builder().udf1("first").build()),
            OptionalFragment::BillingAddress(Address::builder().city("Delhi").build()),
            OptionalFragment::Notes(Notes::builder().udf2("second").build()),
        ]);

        let params = order.to_params("test_key").unwrap();
        assert_eq!(params["billing_address"], json!({ "city": "Delhi" }));
        assert_eq!(params["notes"], json!({ "udf2": "second" }));
    }

    #[test]
    fn test_zero_and_false_are_dropped() {
        let order = order().with_fragments([
            OptionalFragment::SplitSettlement(
                SplitSettlement::builder()
                    .split_type("")
                    .rules(vec![SplitRule::builder().vendor_id("v1").amount(0).build()])
                    .build(),
            ),
            OptionalFragment::Notes(Notes::builder().udf1("").build()),
            OptionalFragment::Tpv(vec![TpvAccount::builder().name("").build()]),
        ]);

        let params = order.to_params("test_key").unwrap();
        assert!(!params.contains_key("split_type"));
        assert_eq!(params["split_settlement"], json!([{ "vendor_id": "v1" }]));
        assert!(!params.contains_key("notes"));
        assert!(!params.contains_key("tpv"));
    }

    #[test]
    fn test_signed_order_hash_matches_body() {
        let credentials = Credentials::new("test_key", "test_secret");
        let signed = order().sign(&credentials).unwrap();

        let mut unsigned = signed.params().clone();
        unsigned.remove(HASH_KEY);
        assert_eq!(sign(&unsigned, "test_secret").0, signed.hash());
        assert_eq!(unsigned, order().to_params("test_key").unwrap());
    }

    #[test]
    fn test_fetch_bodies() {
        assert_eq!(
            AnyJson::Object(FetchOrder::new("ord_1").to_params("k").unwrap()),
            json!({ "key": "k", "id": "ord_1" })
        );
        assert_eq!(
            AnyJson::Object(FetchOrderByReceipt::new("rcpt_1").to_params("k").unwrap()),
            json!({ "key": "k", "id": "rcpt_1" })
        );
    }
}
