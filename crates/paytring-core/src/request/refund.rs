use crate::{
    errors::Result,
    request::{Endpoint, GatewayRequest},
    types::{AmountValue, Params},
};

/// Refunds an order in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundOrder {
    pub order_id: String,
}

impl RefundOrder {
    pub fn new(order_id: impl Into<String>) -> Self {
        RefundOrder {
            order_id: order_id.into(),
        }
    }
}

impl GatewayRequest for RefundOrder {
    const ENDPOINT: Endpoint = Endpoint::RefundOrder;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("id".to_string(), self.order_id.as_str().into());
        Ok(body)
    }
}

/// Fetches a refund and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRefund {
    pub refund_id: String,
}

impl FetchRefund {
    pub fn new(refund_id: impl Into<String>) -> Self {
        FetchRefund {
            refund_id: refund_id.into(),
        }
    }
}

impl GatewayRequest for FetchRefund {
    const ENDPOINT: Endpoint = Endpoint::FetchRefund;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("id".to_string(), self.refund_id.as_str().into());
        Ok(body)
    }
}

/// Refunds part of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRefund {
    pub order_id: String,
    pub amount: AmountValue,
}

impl PartialRefund {
    pub fn new(order_id: impl Into<String>, amount: impl Into<AmountValue>) -> Self {
        PartialRefund {
            order_id: order_id.into(),
            amount: amount.into(),
        }
    }
}

impl GatewayRequest for PartialRefund {
    const ENDPOINT: Endpoint = Endpoint::PartialRefund;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("id".to_string(), self.order_id.as_str().into());
        body.insert("amount".to_string(), self.amount.to_string().into());
        Ok(body)
    }
}

/// Lists the refund attempts made against an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRefundAttempts {
    pub order_id: String,
}

impl FetchRefundAttempts {
    pub fn new(order_id: impl Into<String>) -> Self {
        FetchRefundAttempts {
            order_id: order_id.into(),
        }
    }
}

impl GatewayRequest for FetchRefundAttempts {
    const ENDPOINT: Endpoint = Endpoint::FetchRefundAttempts;

    fn to_params(&self, api_key: &str) -> Result<Params> {
        let mut body = Params::new();
        body.insert("key".to_string(), api_key.into());
        body.insert("order_id".to_string(), self.order_id.as_str().into());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{request::Credentials, types::AnyJson};

    use super::*;

    #[test]
    fn test_partial_refund_amount_is_signed() {
        let credentials = Credentials::new("test_key", "test_secret");
        let small = PartialRefund::new("ord_1", 100u64).sign(&credentials).unwrap();
        let large = PartialRefund::new("ord_1", 200u64).sign(&credentials).unwrap();

        assert_eq!(small.params()["amount"], json!("100"));
        assert_ne!(small.hash(), large.hash());
    }

    #[test]
    fn test_refund_bodies() {
        assert_eq!(
            AnyJson::Object(RefundOrder::new("ord_1").to_params("k").unwrap()),
            json!({ "key": "k", "id": "ord_1" })
        );
        assert_eq!(
            AnyJson::Object(FetchRefund::new("rfnd_1").to_params("k").unwrap()),
            json!({ "key": "k", "id": "rfnd_1" })
        );
        assert_eq!(
            AnyJson::Object(FetchRefundAttempts::new("ord_1").to_params("k").unwrap()),
            json!({ "key": "k", "order_id": "ord_1" })
        );
    }
}
