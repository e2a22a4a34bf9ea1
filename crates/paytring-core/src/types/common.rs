/// Represents any JSON value.
pub type AnyJson = serde_json::Value;

/// A flat request or response body: field name to JSON value.
///
/// Built with `preserve_order`, so fields serialize in insertion order.
pub type Params = serde_json::Map<String, AnyJson>;
