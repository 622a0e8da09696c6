//! Runtime configuration, read from `FORMS_*` environment variables.
//!
//! A `.env` file is honored when present. Every setting has a development
//! default; only the PSK has no fallback, and running without one disables
//! authentication.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared API key. `None` leaves the API open.
    pub api_psk: Option<String>,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Server listen address.
    pub bind_addr: SocketAddr,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = var_or("FORMS_BIND_ADDR", "127.0.0.1:8080")
            .parse()
            .expect("Invalid FORMS_BIND_ADDR format");

        Self {
            api_psk: env::var("FORMS_API_PSK").ok(),
            db_path: var_or("FORMS_DB_PATH", "./data/forms.sqlite").into(),
            bind_addr,
            log_level: var_or("FORMS_LOG_LEVEL", "info"),
        }
    }
}
