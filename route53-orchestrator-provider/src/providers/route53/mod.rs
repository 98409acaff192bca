//! AWS Route 53 provider

mod decode;
mod error;
mod http;
mod provider;
mod sign;

use std::sync::Arc;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::traits::{RequestExecutor, XmlParser};
use crate::types::Credentials;
use crate::xml::QuickXmlParser;

/// Default [`RequestExecutor`]: reqwest transport with AWS Signature Version 4.
///
/// Retries transient failures (network errors, timeouts, throttling) with exponential
/// backoff, up to [`ClientConfig::max_retries`] times.
pub struct SigV4Executor {
    pub(crate) client: Client,
    pub(crate) max_retries: u32,
}

impl SigV4Executor {
    /// Creates an executor using the timeouts and retry count of `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config.connect_timeout(), config.request_timeout())?,
            max_retries: config.max_retries(),
        })
    }
}

/// Route 53 hosted zone client.
///
/// Builds requests from a fixed [`ClientConfig`], executes them through a
/// [`RequestExecutor`] and decodes responses through an [`XmlParser`].
///
/// # Construction
///
/// ```rust,no_run
/// use route53_orchestrator_provider::{Credentials, Route53Client};
///
/// let client = Route53Client::new(Credentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ))?;
/// # Ok::<(), route53_orchestrator_provider::ProviderError>(())
/// ```
pub struct Route53Client {
    pub(crate) config: ClientConfig,
    pub(crate) credentials: Credentials,
    pub(crate) executor: Arc<dyn RequestExecutor>,
    pub(crate) parser: Arc<dyn XmlParser>,
}

/// Builder for [`Route53Client`] with pluggable transport and parser.
pub struct Route53ClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
    executor: Option<Arc<dyn RequestExecutor>>,
    parser: Option<Arc<dyn XmlParser>>,
}

impl Route53ClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: ClientConfig::default(),
            executor: None,
            parser: None,
        }
    }

    /// Replace the request profile.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of [`SigV4Executor`].
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Use a custom XML parser instead of [`QuickXmlParser`].
    pub fn parser(mut self, parser: Arc<dyn XmlParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Build the [`Route53Client`] instance.
    pub fn build(self) -> Result<Route53Client> {
        let executor = match self.executor {
            Some(executor) => executor,
            None => Arc::new(SigV4Executor::new(&self.config)?),
        };
        Ok(Route53Client {
            config: self.config,
            credentials: self.credentials,
            executor,
            parser: self.parser.unwrap_or_else(|| Arc::new(QuickXmlParser)),
        })
    }
}

impl Route53Client {
    /// Creates a client with default settings (2 retries, 30s timeout).
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(credentials: Credentials) -> Route53ClientBuilder {
        Route53ClientBuilder::new(credentials)
    }

    /// The request profile in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
