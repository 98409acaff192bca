//! Request profile shared by every call of one client
//!
//! Route 53 is a global service: requests are always signed for `us-east-1` and every
//! request carries the `apiVersion` query parameter. Both are fixed here, once per client,
//! instead of being patched into requests by the caller.

use std::time::Duration;

use crate::types::{ApiRequest, HttpMethod};

/// Route 53 API host.
pub const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Signing region of the global endpoint.
pub const ROUTE53_REGION: &str = "us-east-1";
/// Signing service name.
pub const ROUTE53_SERVICE: &str = "route53";
/// API version used in paths, namespace and the `apiVersion` parameter.
pub const ROUTE53_API_VERSION: &str = "2013-04-01";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 默认重试次数
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Immutable request profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    max_retries: u32,
    connect_timeout: Duration,
    request_timeout: Duration,
    max_items: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: ROUTE53_HOST.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_items: None,
        }
    }
}

impl ClientConfig {
    /// Returns a builder starting from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::default(),
        }
    }

    /// Endpoint host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Signing region. Always [`ROUTE53_REGION`].
    pub fn region(&self) -> &'static str {
        ROUTE53_REGION
    }

    /// Signing service. Always [`ROUTE53_SERVICE`].
    pub fn service(&self) -> &'static str {
        ROUTE53_SERVICE
    }

    /// API version. Always [`ROUTE53_API_VERSION`].
    pub fn api_version(&self) -> &'static str {
        ROUTE53_API_VERSION
    }

    /// Automatic retries for transient transport failures.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// TCP connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Whole-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Page size requested from list calls (`maxitems`), provider default when unset.
    pub fn max_items(&self) -> Option<u32> {
        self.max_items
    }

    /// Versioned resource path, e.g. `/2013-04-01/hostedzone`.
    pub fn path(&self, resource: &str) -> String {
        format!("/{ROUTE53_API_VERSION}/{}", resource.trim_start_matches('/'))
    }

    /// Build a request with the pinned region, service and `apiVersion` parameter.
    pub fn request(
        &self,
        method: HttpMethod,
        resource: &str,
        mut query: Vec<(String, String)>,
        body: Option<String>,
    ) -> ApiRequest {
        query.push(("apiVersion".to_string(), ROUTE53_API_VERSION.to_string()));

        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/xml".to_string()));
        }

        ApiRequest {
            service: ROUTE53_SERVICE.to_string(),
            host: self.host.clone(),
            region: ROUTE53_REGION.to_string(),
            method,
            path: self.path(resource),
            query,
            headers,
            body,
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override the endpoint host (for API-compatible test endpoints).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the connect timeout (default: 10s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the request timeout (default: 30s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the `maxitems` page size for list calls.
    pub fn max_items(mut self, max_items: u32) -> Self {
        self.config.max_items = Some(max_items);
        self
    }

    /// Build the [`ClientConfig`].
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_pins_region_and_api_version() {
        let config = ClientConfig::builder().host("localhost:4566").build();
        let req = config.request(
            HttpMethod::Get,
            "hostedzone",
            vec![("marker".to_string(), "Z2".to_string())],
            None,
        );

        assert_eq!(req.region, "us-east-1");
        assert_eq!(req.service, "route53");
        assert_eq!(req.host, "localhost:4566");
        assert_eq!(req.path, "/2013-04-01/hostedzone");
        assert_eq!(req.query_param("marker"), Some("Z2"));
        assert_eq!(req.query_param("apiVersion"), Some("2013-04-01"));
        assert!(req.headers.is_empty());
    }

    #[test]
    fn body_requests_carry_xml_content_type() {
        let req = ClientConfig::default().request(
            HttpMethod::Post,
            "/hostedzone/Z1/rrset/",
            vec![],
            Some("<x/>".to_string()),
        );
        assert_eq!(req.path, "/2013-04-01/hostedzone/Z1/rrset/");
        assert!(
            req.headers
                .iter()
                .any(|(k, v)| k == "Content-Type" && v == "application/xml")
        );
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries(), 2);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.max_items(), None);
    }
}
