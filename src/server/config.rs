use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_REPORT_DIR: &str = "reports";
const DEFAULT_INVOICE_DIR: &str = "invoices";

/// SMTP credentials for outbound email.
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,

    pub upload_dir: PathBuf,
    pub report_dir: PathBuf,
    pub invoice_dir: PathBuf,

    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,

    /// Outbound email settings; emails are only logged when unset.
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            jwt_secret: required("JWT_SECRET")?,
            upload_dir: optional("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            report_dir: optional("REPORT_DIR")
                .unwrap_or_else(|| DEFAULT_REPORT_DIR.to_string())
                .into(),
            invoice_dir: optional("INVOICE_DIR")
                .unwrap_or_else(|| DEFAULT_INVOICE_DIR.to_string())
                .into(),
            cors_origin: optional("CORS_ORIGIN"),
            smtp: smtp_from_env()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// SMTP settings are all-or-nothing: a partial group is a configuration error.
fn smtp_from_env() -> Result<Option<SmtpConfig>, ConfigError> {
    let host = optional("SMTP_HOST");
    let username = optional("SMTP_USERNAME");
    let password = optional("SMTP_PASSWORD");
    let from = optional("SMTP_FROM");

    match (host, username, password, from) {
        (Some(host), Some(username), Some(password), Some(from)) => Ok(Some(SmtpConfig {
            host,
            username,
            password,
            from,
        })),
        (None, None, None, None) => Ok(None),
        _ => Err(ConfigError::InvalidValue {
            name: "SMTP_*".to_string(),
            reason: "SMTP_HOST, SMTP_USERNAME, SMTP_PASSWORD and SMTP_FROM must be set together"
                .to_string(),
        }),
    }
}
