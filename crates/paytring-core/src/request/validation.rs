use crate::{
    errors::Result,
    request::{Endpoint, GatewayRequest},
    types::Params,
};

/// Checks that a UPI virtual payment address exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateVpa {
    pub vpa: String,
}

impl ValidateVpa {
    pub fn new(vpa: impl Into<String>) -> Self {
        ValidateVpa { vpa: vpa.into() }
    }
}

impl GatewayRequest for ValidateVpa {
    const ENDPOINT: Endpoint = Endpoint::ValidateVpa;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("vpa".to_string(), self.vpa.as_str().into());
        Ok(body)
    }
}

/// Looks up a card by its BIN (leading digits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateCardBin {
    pub bin: String,
}

impl ValidateCardBin {
    pub fn new(bin: impl Into<String>) -> Self {
        ValidateCardBin { bin: bin.into() }
    }
}

impl GatewayRequest for ValidateCardBin {
    const ENDPOINT: Endpoint = Endpoint::ValidateCardBin;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("bin_code".to_string(), self.bin.as_str().into());
        Ok(body)
    }
}

/// Gets the conversion rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConversion {
    pub from: String,
    pub to: String,
}

impl CurrencyConversion {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        CurrencyConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl GatewayRequest for CurrencyConversion {
    const ENDPOINT: Endpoint = Endpoint::CurrencyConversion;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("from".to_string(), self.from.as_str().into());
        body.insert("to".to_string(), self.to.as_str().into());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::types::AnyJson;

    use super::*;

    #[test]
    fn test_validation_bodies() {
        assert_eq!(
            AnyJson::Object(ValidateVpa::new("john@upi").to_params("k").unwrap()),
            json!({ "key": "k", "vpa": "john@upi" })
        );
        assert_eq!(
            AnyJson::Object(ValidateCardBin::new("424242").to_params("k").unwrap()),
            json!({ "key": "k", "bin_code": "424242" })
        );
        assert_eq!(
            AnyJson::Object(CurrencyConversion::new("USD", "INR").to_params("k").unwrap()),
            json!({ "key": "k", "from": "USD", "to": "INR" })
        );
    }
}
