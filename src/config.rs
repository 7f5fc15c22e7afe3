//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

/// Runtime settings, collected once at startup.
///
/// Recognized variables: `HOST`, `PORT`, `DATABASE_PATH`, `LOG_FILE`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "athenaeum.sqlite".to_string())
            .into();
        let log_file = env::var("LOG_FILE").ok();

        Self {
            host,
            port,
            database_path,
            log_file,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
