//! Core types used across the Paytring crates.

mod amount;
mod common;

pub use amount::*;
pub use common::*;
