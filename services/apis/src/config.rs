use serde::Deserialize;

use apis_core::config::Config;

/// APIS service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApisConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `APIS_PORT`.
    #[serde(default = "default_port")]
    pub apis_port: u16,
    /// Upper bound on pooled connections (default 10).
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

impl Config for ApisConfig {}
