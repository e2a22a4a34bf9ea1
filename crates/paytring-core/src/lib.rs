//! Paytring core library.
//!
//! This library provides the I/O-free parts of the Paytring gateway protocol:
//! request signing, request assembly, field pruning and response normalization.
//!
//! - **[`signer`]**: The canonical SHA-512 request signature.
//! - **[`prune`]**: Presence rules deciding which fields reach the wire.
//! - **[`fragments`]**: Optional structured sections of an order (addresses, notes, splits, ...).
//! - **[`request`]**: Per-operation request builders and endpoint routing.
//! - **[`response`]**: Normalization of the gateway's response envelope.

pub mod errors;
pub mod fragments;
pub mod prune;
pub mod request;
pub mod response;
pub mod signer;
pub mod types;
