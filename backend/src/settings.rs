//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PRODUCT_*` environment variables or a
//! configuration file. Scalars carry loader defaults; accessors validate and
//! fill in the rest.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::domain::ports::REVIEW_SERVICE_NAME;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;
const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 10;

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A value failed to parse.
    #[error("invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            field,
            message: message.to_string(),
        }
    }
}

/// A single URL or a list of them.
///
/// Comma-separated environment values arrive as a sequence, a lone value as a
/// string.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
            OneOrMany::One(raw) => vec![raw],
            OneOrMany::Many(raw) => raw,
        }),
    )
}

/// Configuration for the product service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCT")]
pub struct ServiceSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// PostgreSQL URL; products are kept in memory when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub database_pool_size: Option<u32>,
    /// Database connection checkout timeout, in seconds.
    pub database_timeout_secs: Option<u64>,
    /// Logical name of the review service in the registry.
    pub review_service_name: Option<String>,
    /// Eureka-compatible registry root, e.g. `http://registry:8761/eureka/`.
    pub registry_url: Option<String>,
    /// Review service base URLs used when no registry is set.
    #[serde(default, deserialize_with = "one_or_many")]
    pub review_instances: Option<Vec<String>>,
    /// Timeout for outbound HTTP calls, in seconds.
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl ServiceSettings {
    /// Bind address, `0.0.0.0:8080` unless configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .trim()
            .parse()
            .map_err(|err| SettingsError::invalid("bind_addr", err))
    }

    /// Database URL, if one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum pool size, defaulting to 10.
    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_DATABASE_POOL_SIZE)
    }

    /// Connection checkout timeout, defaulting to ten seconds.
    pub fn database_timeout(&self) -> Duration {
        Duration::from_secs(
            self.database_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_DATABASE_TIMEOUT_SECS),
        )
    }

    /// Review service name, defaulting to `REVIEW-SERVICE`.
    pub fn review_service_name(&self) -> &str {
        self.review_service_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(REVIEW_SERVICE_NAME)
    }

    /// Registry root URL, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is not a URL.
    pub fn registry_url(&self) -> Result<Option<Url>, SettingsError> {
        self.registry_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| Url::parse(raw).map_err(|err| SettingsError::invalid("registry_url", err)))
            .transpose()
    }

    /// Static review instances; empty when none are configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when any entry is not a URL.
    pub fn review_instances(&self) -> Result<Vec<Url>, SettingsError> {
        self.review_instances
            .iter()
            .flatten()
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(|raw| Url::parse(raw).map_err(|err| SettingsError::invalid("review_instances", err)))
            .collect()
    }

    /// Outbound request timeout, five seconds unless configured.
    pub fn request_timeout(&self) -> Duration {
        let secs = if self.request_timeout_secs == 0 {
            DEFAULT_REQUEST_TIMEOUT_SECS
        } else {
            self.request_timeout_secs
        };
        Duration::from_secs(secs)
    }
}
