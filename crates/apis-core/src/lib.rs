//! Service plumbing shared by APIS binaries: configuration loading, tracing,
//! health checks, request ids and serialization helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
