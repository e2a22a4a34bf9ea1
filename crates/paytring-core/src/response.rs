//! Response envelope normalization.
//!
//! Every gateway response is a JSON object with a boolean `status`. On failure the
//! human-readable message sits in `error.message`, which is either a plain string
//! or a JSON-encoded `{ field: [messages] }` validation mapping.

use serde::Serialize;

use crate::{
    errors::{Error, Result},
    types::{AnyJson, Params},
};

/// Returned when a failed response carries no `error` at all.
pub const INVALID_RESPONSE_MESSAGE: &str = "Something went wrong, invalid response received";
/// Returned when `error` carries no `message`.
pub const INVALID_DATA_MESSAGE: &str = "Something went wrong, invalid data";
/// Returned when no message can be extracted.
pub const FALLBACK_MESSAGE: &str = "Something went wrong, please try again later.";

/// A successful response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Envelope(Params);

impl Envelope {
    /// Always `true` for an envelope that passed normalization.
    pub fn status(&self) -> bool {
        self.0.get("status").and_then(AnyJson::as_bool).unwrap_or(false)
    }

    pub fn get(&self, key: &str) -> Option<&AnyJson> {
        self.0.get(key)
    }

    /// Returns the field as a string slice, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AnyJson::as_str)
    }

    pub fn as_params(&self) -> &Params {
        &self.0
    }

    pub fn into_params(self) -> Params {
        self.0
    }
}

/// A failure reported by the gateway in an otherwise well-formed envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        GatewayError {
            message: message.into(),
        }
    }
}

/// Parses a raw response body and normalizes it.
pub fn normalize(raw: &[u8]) -> Result<Envelope> {
    let body: Params = serde_json::from_slice(raw).map_err(Error::Decode)?;
    Ok(normalize_envelope(body)?)
}

/// Succeeds only if `status` is the boolean `true`.
pub fn normalize_envelope(body: Params) -> std::result::Result<Envelope, GatewayError> {
    if body.get("status") == Some(&AnyJson::Bool(true)) {
        return Ok(Envelope(body));
    }
    Err(GatewayError::new(extract_error_message(body.get("error"))))
}

/// Extracts a readable message from the `error` field of a failed response.
///
/// Stops at the first rule that applies:
/// 1. no `error` → [`INVALID_RESPONSE_MESSAGE`];
/// 2. `error` has no `message` → [`INVALID_DATA_MESSAGE`];
/// 3. `message` decodes to a validation mapping → the first string of the first
///    non-empty list, in document order;
/// 4. `message` is a plain string → the string itself;
/// 5. otherwise → [`FALLBACK_MESSAGE`].
pub fn extract_error_message(error: Option<&AnyJson>) -> String {
    let error = match error {
        None | Some(AnyJson::Null) => return INVALID_RESPONSE_MESSAGE.to_string(),
        Some(error) => error,
    };

    let error: Params = match serde_json::from_value(error.clone()) {
        Ok(map) => map,
        Err(err) => return format!("Invalid error response received: {err}"),
    };

    match error.get("message") {
        None | Some(AnyJson::Null) => INVALID_DATA_MESSAGE.to_string(),
        Some(AnyJson::String(message)) => match serde_json::from_str::<Option<Params>>(message) {
            Ok(Some(fields)) => first_field_message(&fields),
            // A JSON `null` decodes to an empty mapping.
            Ok(None) => FALLBACK_MESSAGE.to_string(),
            Err(_) => message.clone(),
        },
        // Some gateways send the validation mapping as structured JSON.
        Some(AnyJson::Object(fields)) => first_field_message(fields),
        Some(_) => FALLBACK_MESSAGE.to_string(),
    }
}

fn first_field_message(fields: &Params) -> String {
    fields
        .values()
        .find_map(|messages| messages.as_array()?.first()?.as_str())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}
