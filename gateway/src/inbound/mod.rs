//! Inbound adapters driving the domain services.

pub mod http;
