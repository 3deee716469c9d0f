//! Backend integration - wire protocol types and the HTTP client
//!
//! The planning agent lives entirely in an external service; this layer
//! treats it as an opaque HTTP collaborator with a single endpoint.

pub mod client;
pub mod protocol;

pub use client::{PlanClient, DEFAULT_BASE_URL};
