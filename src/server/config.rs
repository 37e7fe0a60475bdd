use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://faculty.db?mode=rwc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// The single origin allowed to call the API from a browser.
    pub cors_origin: String,
    /// Token signing secret. Nothing consumes it until authentication exists.
    pub jwt_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            port: match std::env::var("PORT") {
                Ok(raw) => parse_port(&raw)?,
                Err(_) => DEFAULT_PORT,
            },
            cors_origin: var_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            jwt_secret: std::env::var("JWT_SECRET").ok(),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::info!("{} not set, using default: {}", name, default);
        default.to_string()
    })
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
