//! Optional structured sections of an order.
//!
//! Each fragment is serialized into its own JSON object, pruned field by field
//! (see [`crate::prune`]) and attached to the order body only if something is left.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result},
    prune::{Presence, include_if_present, prune},
    types::{AnyJson, Params},
};

/// Currency used when no [`PaymentConfig`] sets one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// The paying customer. Always sent, even when fields are empty.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub phone: String,
}

/// Currency, gateway selection and capture mode for an order.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentConfig {
    /// 3-letter currency code, defaults to [`DEFAULT_CURRENCY`].
    #[builder(into)]
    pub currency: Option<String>,
    /// Payment gateway identifier.
    #[builder(into)]
    pub pg: Option<String>,
    /// Capture automatically on success. Disabled unless set.
    #[builder(default)]
    pub auto_capture: bool,
}

/// A billing or shipping address.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[builder(into)]
    pub firstname: Option<String>,
    #[builder(into)]
    pub lastname: Option<String>,
    #[builder(into)]
    pub phone: Option<String>,
    #[builder(into)]
    pub line1: Option<String>,
    #[builder(into)]
    pub line2: Option<String>,
    #[builder(into)]
    pub city: Option<String>,
    #[builder(into)]
    pub state: Option<String>,
    #[builder(into)]
    pub country: Option<String>,
    #[builder(into)]
    pub zipcode: Option<String>,
}

/// Up to five free-form merchant fields.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    #[builder(into)]
    pub udf1: Option<String>,
    #[builder(into)]
    pub udf2: Option<String>,
    #[builder(into)]
    pub udf3: Option<String>,
    #[builder(into)]
    pub udf4: Option<String>,
    #[builder(into)]
    pub udf5: Option<String>,
}

/// One vendor's share of a split settlement.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRule {
    #[builder(into)]
    pub vendor_id: String,
    /// Sent as a JSON number. A zero amount is dropped.
    pub amount: u64,
}

/// Settlement split between vendors.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSettlement {
    #[builder(into)]
    pub split_type: Option<String>,
    #[builder(default)]
    pub rules: Vec<SplitRule>,
}

/// A third-party-verification bank account.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TpvAccount {
    #[builder(into)]
    pub account_number: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub ifsc: Option<String>,
}

/// The closed set of optional order fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalFragment {
    PaymentConfig(PaymentConfig),
    BillingAddress(Address),
    ShippingAddress(Address),
    Notes(Notes),
    SplitSettlement(SplitSettlement),
    Tpv(Vec<TpvAccount>),
}

impl From<PaymentConfig> for OptionalFragment {
    fn from(value: PaymentConfig) -> Self {
        OptionalFragment::PaymentConfig(value)
    }
}

impl From<Notes> for OptionalFragment {
    fn from(value: Notes) -> Self {
        OptionalFragment::Notes(value)
    }
}

impl From<SplitSettlement> for OptionalFragment {
    fn from(value: SplitSettlement) -> Self {
        OptionalFragment::SplitSettlement(value)
    }
}

impl From<Vec<TpvAccount>> for OptionalFragment {
    fn from(value: Vec<TpvAccount>) -> Self {
        OptionalFragment::Tpv(value)
    }
}

impl PaymentConfig {
    /// Writes `currency`, `pg` and `auto_capture`, applying defaults.
    pub fn merge_into(&self, body: &mut Params) {
        let currency = self
            .currency
            .as_deref()
            .filter(|c| c.is_present())
            .unwrap_or(DEFAULT_CURRENCY);
        body.insert("currency".to_string(), currency.into());
        include_if_present(body, "pg", self.pg.as_deref());
        let auto_capture = if self.auto_capture { "true" } else { "false" };
        body.insert("auto_capture".to_string(), auto_capture.into());
    }
}

impl SplitSettlement {
    /// Writes `split_type` at the top level and the pruned rules under `split_settlement`.
    pub fn merge_into(&self, body: &mut Params) -> Result<()> {
        include_if_present(body, "split_type", self.split_type.as_deref());
        attach_list(body, "split_settlement", &self.rules)
    }
}

/// Serializes `fragment`, prunes it and attaches it under `key` if anything is left.
pub fn attach<T: Serialize>(body: &mut Params, key: &str, fragment: &T) -> Result<()> {
    let object = prune(to_object(fragment)?);
    include_if_present(body, key, object);
    Ok(())
}

/// Like [`attach`] for a list: empty elements are dropped, then the list is attached if non-empty.
pub fn attach_list<T: Serialize>(body: &mut Params, key: &str, items: &[T]) -> Result<()> {
    let mut list = Vec::with_capacity(items.len());
    for item in items {
        let object = prune(to_object(item)?);
        if object.is_present() {
            list.push(AnyJson::Object(object));
        }
    }
    include_if_present(body, key, list);
    Ok(())
}

fn to_object<T: Serialize>(value: &T) -> Result<Params> {
    match serde_json::to_value(value).map_err(Error::Encode)? {
        AnyJson::Object(map) => Ok(map),
        _ => Ok(Params::new()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_payment_config_defaults() {
        let mut body = Params::new();
        PaymentConfig::default().merge_into(&mut body);
        assert_eq!(
            AnyJson::Object(body),
            json!({ "currency": "INR", "auto_capture": "false" })
        );

        let mut body = Params::new();
        PaymentConfig::builder()
            .currency("USD")
            .pg("razorpay")
            .auto_capture(true)
            .build()
            .merge_into(&mut body);
        assert_eq!(
            AnyJson::Object(body),
            json!({ "currency": "USD", "pg": "razorpay", "auto_capture": "true" })
        );
    }

    #[test]
    fn test_empty_currency_falls_back() {
        let mut body = Params::new();
        PaymentConfig::builder().currency("").build().merge_into(&mut body);
        assert_eq!(body.get("currency"), Some(&json!("INR")));
    }

    #[test]
    fn test_attach_prunes_address() {
        let mut body = Params::new();
        let address = Address::builder()
            .firstname("John")
            .lastname("")
            .city("Pune")
            .build();
        attach(&mut body, "billing_address", &address).unwrap();
        assert_eq!(
            AnyJson::Object(body),
            json!({ "billing_address": { "firstname": "John", "city": "Pune" } })
        );
    }

    #[test]
    fn test_attach_skips_empty_fragment() {
        let mut body = Params::new();
        attach(&mut body, "notes", &Notes::builder().udf1("").build()).unwrap();
        attach(&mut body, "shipping_address", &Address::default()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_split_settlement_merge() {
        let mut body = Params::new();
        SplitSettlement::builder()
            .split_type("percent")
            .rules(vec![
                SplitRule::builder().vendor_id("v1").amount(50).build(),
                SplitRule::builder().vendor_id("v2").amount(0).build(),
                SplitRule::builder().vendor_id("").amount(0).build(),
            ])
            .build()
            .merge_into(&mut body)
            .unwrap();

        assert_eq!(
            AnyJson::Object(body),
            json!({
                "split_type": "percent",
                "split_settlement": [
                    { "vendor_id": "v1", "amount": 50 },
                    { "vendor_id": "v2" }
                ]
            })
        );
    }

    #[test]
    fn test_split_type_without_rules() {
        let mut body = Params::new();
        SplitSettlement::builder()
            .split_type("percent")
            .build()
            .merge_into(&mut body)
            .unwrap();
        assert_eq!(AnyJson::Object(body), json!({ "split_type": "percent" }));
    }

    #[test]
    fn test_attach_list_drops_empty_accounts() {
        let mut body = Params::new();
        let accounts = vec![
            TpvAccount::default(),
            TpvAccount::builder()
                .account_number("1234567890")
                .name("John Doe")
                .ifsc("IFSC1234")
                .build(),
        ];
        attach_list(&mut body, "tpv", &accounts).unwrap();
        assert_eq!(
            AnyJson::Object(body),
            json!({
                "tpv": [{ "account_number": "1234567890", "name": "John Doe", "ifsc": "IFSC1234" }]
            })
        );

        let mut body = Params::new();
        attach_list(&mut body, "tpv", &[TpvAccount::default()]).unwrap();
        assert!(body.is_empty());
    }
}
