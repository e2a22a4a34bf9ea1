use std::fmt::Display;

use bon::Builder;

use crate::{
    errors::{Result, ValidationError},
    prune::{Presence, include_if_present},
    request::{Endpoint, GatewayRequest},
    types::{AnyJson, Params},
};

/// Payment code selecting the UPI collect flow.
pub const UPI_COLLECT: &str = "collect";

/// How an order is paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Upi,
    Card,
    /// Any other method understood by the gateway, sent verbatim.
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::Other(method) => method,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value {
            "upi" => PaymentMethod::Upi,
            "card" => PaymentMethod::Card,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Instrument details for [`ProcessPayment`]. Which fields are required depends on the method.
#[derive(Builder, Clone, Default, PartialEq, Eq)]
pub struct PaymentData {
    #[builder(into)]
    pub vpa: Option<String>,
    #[builder(into)]
    pub card_number: Option<String>,
    #[builder(into)]
    pub expiry_month: Option<String>,
    #[builder(into)]
    pub expiry_year: Option<String>,
    #[builder(into)]
    pub cvv: Option<String>,
    #[builder(into)]
    pub holder_name: Option<String>,
}

impl std::fmt::Debug for PaymentData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("PaymentData")
            .field("vpa", &self.vpa)
            .field("card_number", &masked(&self.card_number))
            .field("expiry_month", &masked(&self.expiry_month))
            .field("expiry_year", &masked(&self.expiry_year))
            .field("cvv", &masked(&self.cvv))
            .field("holder_name", &self.holder_name)
            .finish()
    }
}

fn require(value: &Option<String>, missing: ValidationError) -> std::result::Result<&str, ValidationError> {
    value
        .as_deref()
        .filter(|v| v.is_present())
        .ok_or(missing)
}

/// Card fields, checked in order: number, expiry month, expiry year, CVV.
struct CardFields<'a> {
    number: &'a str,
    expiry_month: &'a str,
    expiry_year: &'a str,
    cvv: &'a str,
}

impl PaymentData {
    fn card_fields(&self) -> std::result::Result<CardFields<'_>, ValidationError> {
        Ok(CardFields {
            number: require(&self.card_number, ValidationError::MissingCardNumber)?,
            expiry_month: require(&self.expiry_month, ValidationError::MissingExpiryMonth)?,
            expiry_year: require(&self.expiry_year, ValidationError::MissingExpiryYear)?,
            cvv: require(&self.cvv, ValidationError::MissingCvv)?,
        })
    }
}

/// Pays an existing order.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ProcessPayment {
    #[builder(into)]
    pub order_id: String,
    #[builder(into)]
    pub method: PaymentMethod,
    /// Method-specific payment code, e.g. [`UPI_COLLECT`].
    #[builder(into)]
    pub code: String,
    #[builder(default)]
    pub payment_data: PaymentData,
    /// Client device, e.g. `android`.
    #[builder(into)]
    pub device: Option<String>,
}

impl ProcessPayment {
    // Checked on the wire name so `Other("upi")` and `Other("card")` are validated too.
    fn is_upi_collect(&self) -> bool {
        self.method.as_str() == PaymentMethod::Upi.as_str() && self.code == UPI_COLLECT
    }

    fn is_card(&self) -> bool {
        self.method.as_str() == PaymentMethod::Card.as_str()
    }
}

impl GatewayRequest for ProcessPayment {
    const ENDPOINT: Endpoint = Endpoint::ProcessPayment;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let vpa = if self.is_upi_collect() {
            Some(require(&self.payment_data.vpa, ValidationError::MissingVpa)?)
        } else {
            None
        };
        let card = if self.is_card() {
            Some(self.payment_data.card_fields()?)
        } else {
            None
        };

        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("order_id".to_string(), self.order_id.as_str().into());
        body.insert("method".to_string(), self.method.as_str().into());
        body.insert("code".to_string(), self.code.as_str().into());
        include_if_present(&mut body, "device", self.device.as_deref());

        if let Some(vpa) = vpa {
            body.insert("vpa".to_string(), vpa.into());
        }

        if let Some(card) = card {
            let mut card_body = Params::new();
            include_if_present(
                &mut card_body,
                "holder_name",
                self.payment_data.holder_name.as_deref(),
            );
            card_body.insert("number".to_string(), card.number.into());
            card_body.insert("expiry_month".to_string(), card.expiry_month.into());
            card_body.insert("expiry_year".to_string(), card.expiry_year.into());
            card_body.insert("cvv".to_string(), card.cvv.into());
            body.insert("card".to_string(), AnyJson::Object(card_body));
        }

        Ok(body)
    }
}
