use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

/// Runtime configuration.
///
/// Only the bind address is environment-driven. The password salt, token
/// secret, token TTL, and message retention cap are compiled-in constants:
/// this is a reference-grade service and those values are part of its
/// observable contract.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {raw}")))?,
            Err(_) => 8000,
        };

        Ok(Self { host, port })
    }
}
