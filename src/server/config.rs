use std::{net::SocketAddr, path::PathBuf};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAIL_FROM: &str = "Car Rental <no-reply@localhost>";
const DEFAULT_CORS_ORIGINS: &str = "http://127.0.0.1:5500,http://localhost:5500";
const DEFAULT_UPLOADS_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,
    pub app_addr: SocketAddr,

    /// Operator address that receives a copy of every booking.
    pub admin_email: String,

    /// Mail relay endpoint. Without one, outgoing mail is only logged.
    pub mail_api_url: Option<Url>,
    pub mail_api_key: Option<String>,
    pub mail_from: String,

    pub cors_origins: Vec<String>,

    /// Frontend directory served for any path the API does not handle.
    pub static_dir: Option<PathBuf>,
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let app_addr = var("APP_ADDR")
            .unwrap_or_else(|| DEFAULT_APP_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "APP_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let mail_api_url = var("MAIL_API_URL")
            .map(|value| Url::parse(&value))
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "MAIL_API_URL".to_string(),
                reason: e.to_string(),
            })?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_addr,
            admin_email: required("ADMIN_EMAIL")?,
            mail_api_url,
            mail_api_key: var("MAIL_API_KEY"),
            mail_from: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            cors_origins,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            uploads_dir: var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR)),
        })
    }
}
