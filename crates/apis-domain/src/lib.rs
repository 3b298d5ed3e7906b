//! Credential and identifier rules for APIS records.
//!
//! Pure functions, no I/O. The service's use cases call these before any
//! repository is touched.

pub mod credentials;
pub mod id;
