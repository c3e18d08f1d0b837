//! Service-binding resolution

use bindcheck_core::error::{BindcheckError, Result};
use bindcheck_core::ConnectionCredentials;
use bindcheck_types::{ServiceBinding, VcapApplication, VcapServices};
use tracing::debug;

use crate::env::{EnvSource, VCAP_APPLICATION, VCAP_SERVICES};

/// Resolves database credentials for one service key of `VCAP_SERVICES`
#[derive(Debug, Clone)]
pub struct BindingResolver {
    service: String,
}

impl BindingResolver {
    /// Create a resolver for the given service key
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// The service key this resolver looks up
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Parse a raw `VCAP_SERVICES` document. The top level must be an object.
    pub fn parse_services(raw: &str) -> Result<VcapServices> {
        Ok(serde_json::from_str(raw)?)
    }

    /// First binding registered under the service key. Later entries are
    /// never decoded.
    pub fn first_binding(&self, services: &VcapServices) -> Result<ServiceBinding> {
        let entry = services
            .get(&self.service)
            .ok_or_else(|| BindcheckError::ServiceNotFound(self.service.clone()))?;

        let first = entry
            .as_array()
            .ok_or_else(|| {
                BindcheckError::InvalidBinding(format!(
                    "'{}' is not a list of bindings",
                    self.service
                ))
            })?
            .first()
            .ok_or_else(|| {
                BindcheckError::InvalidBinding(format!("no bindings listed for '{}'", self.service))
            })?;

        serde_json::from_value(first.clone()).map_err(|e| {
            BindcheckError::InvalidBinding(format!(
                "first binding of '{}' is malformed: {}",
                self.service, e
            ))
        })
    }

    /// Resolve credentials from a raw `VCAP_SERVICES` document
    pub fn resolve_str(&self, raw: &str) -> Result<ConnectionCredentials> {
        let services = Self::parse_services(raw)?;
        let binding = self.first_binding(&services)?;

        let uri = binding.uri().ok_or_else(|| {
            BindcheckError::InvalidBinding(format!(
                "binding '{}' has no credentials.uri",
                binding.display_name()
            ))
        })?;

        let credentials = ConnectionCredentials::from_uri(uri)?;
        debug!(
            service = %self.service,
            binding = binding.display_name(),
            address = %credentials.address(),
            "Resolved service binding"
        );
        Ok(credentials)
    }

    /// Resolve credentials from the environment
    pub fn resolve(&self, env: &EnvSource) -> Result<ConnectionCredentials> {
        let raw = env.require(VCAP_SERVICES)?;
        self.resolve_str(&raw)
    }
}

impl Default for BindingResolver {
    fn default() -> Self {
        Self::new(bindcheck_core::ServerConfig::DEFAULT_SERVICE)
    }
}

/// Parse `VCAP_APPLICATION`, if present and well-formed
pub fn application(env: &EnvSource) -> Option<VcapApplication> {
    let raw = env.var(VCAP_APPLICATION)?;
    match serde_json::from_str(&raw) {
        Ok(app) => Some(app),
        Err(e) => {
            debug!("Ignoring malformed {}: {}", VCAP_APPLICATION, e);
            None
        }
    }
}
