use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use inoxviet_core::AppError;
use ipnet::IpNet;
use tracing_subscriber::EnvFilter;

/// Where collections, settings and the audit trail are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres { database_url: String },
}

/// External chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEndpointConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub storage: StorageBackend,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub trusted_proxies: Vec<IpNet>,
    pub chat_endpoint: Option<ChatEndpointConfig>,
    pub chat_history_limit: usize,
    pub default_page_size: usize,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let storage = match env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".to_owned())
            .as_str()
        {
            "memory" if !migrate_only => StorageBackend::Memory,
            "memory" | "postgres" => StorageBackend::Postgres {
                database_url: required_non_empty_env("DATABASE_URL")?,
            },
            other => {
                return Err(AppError::Validation(format!(
                    "STORAGE_BACKEND must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let trusted_proxies =
            parse_trusted_proxies(env::var("TRUSTED_PROXIES").unwrap_or_default().as_str())?;

        let chat_endpoint = optional_env("CHAT_COMPLETION_URL").map(|url| ChatEndpointConfig {
            url,
            api_key: optional_env("CHAT_COMPLETION_API_KEY"),
            model: optional_env("CHAT_COMPLETION_MODEL"),
            timeout: Duration::from_secs(
                env::var("CHAT_COMPLETION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(30),
            ),
        });

        let chat_history_limit = positive_usize_env("CHAT_HISTORY_LIMIT", 10)?;
        let default_page_size = positive_usize_env("DEFAULT_PAGE_SIZE", 10)?;

        Ok(Self {
            migrate_only,
            storage,
            frontend_url,
            api_host,
            api_port,
            trusted_proxies,
            chat_endpoint,
            chat_history_limit,
            default_page_size,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Parses a comma-separated CIDR list. Bare addresses become host routes.
pub fn parse_trusted_proxies(value: &str) -> Result<Vec<IpNet>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            IpNet::from_str(entry)
                .or_else(|_| IpAddr::from_str(entry).map(IpNet::from))
                .map_err(|error| {
                    AppError::Validation(format!("invalid TRUSTED_PROXIES entry '{entry}': {error}"))
                })
        })
        .collect()
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    optional_env(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

fn positive_usize_env(name: &str, default: usize) -> Result<usize, AppError> {
    let Some(value) = optional_env(name) else {
        return Ok(default);
    };

    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(AppError::Validation(format!(
            "{name} must be a positive integer, got '{value}'"
        ))),
    }
}
