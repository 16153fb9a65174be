// src/config.rs

use crate::utils::credentials::AdminCredentials;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    /// Allowed CORS origins: comma-separated list, or "*" for any.
    pub cors_origins: String,

    /// Fixed admin credential pair, compared verbatim at login.
    pub admin: AdminCredentials,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let admin = AdminCredentials::new(
            env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin_kamch".to_string()),
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin_kamch123".to_string()),
        );

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            cors_origins,
            admin,
            rust_log,
        }
    }
}
