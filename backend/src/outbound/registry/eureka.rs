//! Eureka-compatible registry client.
//!
//! Queries `GET <registry>/apps/{NAME}` on every resolution and rotates across
//! the instances reporting `UP`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::debug;
use url::Url;

use super::RoundRobin;
use super::dto::ApplicationEnvelopeDto;
use crate::domain::ports::{ServiceLocator, ServiceLocatorError};

/// Service locator backed by a Eureka registry.
pub struct EurekaServiceLocator {
    client: Client,
    registry: Url,
    rotation: RoundRobin,
}

impl EurekaServiceLocator {
    /// Build a locator for the registry rooted at `registry`
    /// (for example `http://registry:8761/eureka/`).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(registry: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            registry,
            rotation: RoundRobin::default(),
        })
    }

    fn application_url(&self, service: &str) -> Result<Url, ServiceLocatorError> {
        let mut url = self.registry.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ServiceLocatorError::registry(format!(
                    "registry address {} has no path",
                    self.registry
                ))
            })?
            .pop_if_empty()
            .push("apps")
            .push(&service.to_ascii_uppercase());
        Ok(url)
    }
}

#[async_trait]
impl ServiceLocator for EurekaServiceLocator {
    async fn resolve(&self, service: &str) -> Result<Url, ServiceLocatorError> {
        let url = self.application_url(service)?;
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| ServiceLocatorError::registry(error.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ServiceLocatorError::unknown_service(service));
        }
        if !status.is_success() {
            return Err(ServiceLocatorError::registry(format!(
                "status {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| ServiceLocatorError::registry(error.to_string()))?;
        let envelope: ApplicationEnvelopeDto =
            serde_json::from_slice(body.as_ref()).map_err(|error| {
                ServiceLocatorError::registry(format!("invalid registry payload: {error}"))
            })?;

        let instances = envelope.into_up_instances();
        if instances.is_empty() {
            return Err(ServiceLocatorError::no_instances(service));
        }
        let index = self
            .rotation
            .next_index(&service.to_ascii_uppercase(), instances.len());
        let chosen = instances
            .into_iter()
            .nth(index)
            .ok_or_else(|| ServiceLocatorError::no_instances(service))?;
        debug!(service, instance = %chosen, "resolved service instance");
        Ok(chosen)
    }
}
