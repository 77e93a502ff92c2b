//! Actix middleware: request tracing and CORS.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
