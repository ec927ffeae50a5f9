//! Wire models shared by the Galleria admin client and console.
//!
//! This crate provides:
//! - Response envelopes used by every collection endpoint
//! - `PageResult` and `FilterState`, the pagination and filter contract
//! - Entity records and mutation payloads for the admin domain

pub mod envelope;
pub mod filter;
pub mod model;

pub use envelope::{AckEnvelope, ItemEnvelope, ListEnvelope, LoginEnvelope, PageResult};
pub use filter::{DEFAULT_PAGE_SIZE, FilterState, filter_keys};
pub use model::*;
