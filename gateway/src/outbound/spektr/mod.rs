//! Adapter for the legacy Spektr account-management API.
//!
//! One GET per logical operation, arguments JSON-encoded into a query
//! parameter, replies decoded through transport DTOs with the field
//! normalizers applied in one pass.

mod client;
mod dto;
mod normalize;

pub use client::SpektrClient;
