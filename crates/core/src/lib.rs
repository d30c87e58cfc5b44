//! `pulse-core` — shared building blocks for the summary endpoints.
//!
//! This crate contains **pure** helpers (no IO, no HTTP, no config).

pub mod error;
pub mod money;
pub mod nullable;
pub mod quantity;
pub mod tally;

pub use error::{DomainError, DomainResult};
pub use money::{CurrencyDivisor, Money};
pub use nullable::deserialize_null_default;
pub use quantity::{deserialize_quantity, parse_quantity};
pub use tally::{ItemTally, NO_DATA};
