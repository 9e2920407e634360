//! Gateway configuration.

use std::time::Duration;

use staffdir_domain::error::StaffDirError;

use crate::gateway::RestLocationGateway;

/// Configuration for the REST gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Scheme and authority of the API gateway, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Service segment of the routed path, e.g. `employee`.
    pub service: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            service: "employee".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl GatewayConfig {
    /// Full collection URL: `<base>/services/<service>/api/locations`.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}/services/{}/api/locations",
            self.base_url.trim_end_matches('/'),
            self.service
        )
    }

    /// Build a [`RestLocationGateway`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn build(&self) -> Result<RestLocationGateway, StaffDirError> {
        RestLocationGateway::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.service, "employee");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_join_base_url_and_service_segment() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.api_url(),
            "http://localhost:8080/services/employee/api/locations"
        );
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let config = GatewayConfig {
            base_url: "http://gateway:9000/".to_string(),
            ..GatewayConfig::default()
        };
        assert_eq!(
            config.api_url(),
            "http://gateway:9000/services/employee/api/locations"
        );
    }
}
