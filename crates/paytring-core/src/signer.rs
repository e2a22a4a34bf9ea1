//! Canonical request signature.
//!
//! The gateway authenticates a request by recomputing the same digest from the
//! same fields and the shared secret:
//!
//! 1. take every field whose value is a JSON string (numbers, booleans, objects
//!    and arrays are skipped, not stringified);
//! 2. sort those fields by key, byte-wise ascending;
//! 3. concatenate `value + "|"` for each of them, then append the secret;
//! 4. SHA-512 the UTF-8 bytes and render the digest as lowercase hex.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::{
    errors::{Error, Result},
    types::{AnyJson, Params},
};

/// Reserved body field holding the signature.
pub const HASH_KEY: &str = "hash";

/// A lowercase hex SHA-512 request signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(pub String);

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds the string that gets hashed for `params` under `secret`.
///
/// The reserved [`HASH_KEY`] field is never part of the signed snapshot.
pub fn canonical_string(params: &Params, secret: &str) -> String {
    let mut fields: Vec<(&str, &str)> = params
        .iter()
        .filter(|(key, _)| key.as_str() != HASH_KEY)
        .filter_map(|(key, value)| value.as_str().map(|value| (key.as_str(), value)))
        .collect();
    fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut canonical = String::new();
    for (_, value) in fields {
        canonical.push_str(value);
        canonical.push('|');
    }
    canonical.push_str(secret);
    canonical
}

/// Computes the signature of `params` under `secret`.
pub fn sign(params: &Params, secret: &str) -> Signature {
    let digest = Sha512::digest(canonical_string(params, secret).as_bytes());
    Signature(hex::encode(digest))
}

/// Request parameters together with their signature.
///
/// The signature is computed once, over the parameters as they were before the
/// `hash` field existed, and is stored as the last field of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    params: Params,
    signature: Signature,
}

impl SignedRequest {
    /// Signs `params`, replacing any stale `hash` field.
    pub fn sign(mut params: Params, secret: &str) -> Self {
        params.shift_remove(HASH_KEY);
        let signature = sign(&params, secret);
        params.insert(
            HASH_KEY.to_string(),
            AnyJson::String(signature.0.clone()),
        );
        SignedRequest { params, signature }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn hash(&self) -> &str {
        &self.signature.0
    }

    /// The full body, `hash` included.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// Serializes the body as JSON.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.params).map_err(Error::Encode)
    }
}
