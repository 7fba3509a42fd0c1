//! Locator over a fixed set of instance addresses.

use std::collections::HashMap;

use async_trait::async_trait;
use url::Url;

use super::RoundRobin;
use crate::domain::ports::{ServiceLocator, ServiceLocatorError};

/// Resolves service names from a configured instance table.
#[derive(Debug, Default)]
pub struct StaticServiceLocator {
    services: HashMap<String, Vec<Url>>,
    rotation: RoundRobin,
}

impl StaticServiceLocator {
    /// Create an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the instances answering for `service`.
    ///
    /// Names are matched case-insensitively, as registries do.
    #[must_use]
    pub fn with_service(mut self, service: &str, instances: Vec<Url>) -> Self {
        self.services.insert(service.to_ascii_uppercase(), instances);
        self
    }
}

#[async_trait]
impl ServiceLocator for StaticServiceLocator {
    async fn resolve(&self, service: &str) -> Result<Url, ServiceLocatorError> {
        let key = service.to_ascii_uppercase();
        let instances = self
            .services
            .get(&key)
            .ok_or_else(|| ServiceLocatorError::unknown_service(service))?;
        if instances.is_empty() {
            return Err(ServiceLocatorError::no_instances(service));
        }
        let index = self.rotation.next_index(&key, instances.len());
        instances
            .get(index)
            .cloned()
            .ok_or_else(|| ServiceLocatorError::no_instances(service))
    }
}
