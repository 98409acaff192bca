//! # route53-orchestrator-provider
//!
//! A typed client for the AWS Route 53 hosted zone API: change-batch XML codec, XML response
//! decoding, AWS Signature V4 transport and a [`HostedZoneApi`] trait over all of it.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! route53-orchestrator-provider = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use route53_orchestrator_provider::{
//!     Credentials, HostedZoneApi, RecordTypeFilter, Route53Client,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client from environment credentials
//!     let credentials = Credentials::from_env().ok_or("AWS credentials not set")?;
//!     let client = Route53Client::new(credentials)?;
//!
//!     // 2. List hosted zones
//!     let page = client.list_hosted_zones(None).await?;
//!     for zone in &page.zones {
//!         println!("{} ({})", zone.name, zone.id);
//!     }
//!
//!     // 3. List A and MX record sets of the first zone
//!     let records = client
//!         .list_record_sets(&page.zones[0].id, &RecordTypeFilter::parse("A,MX"))
//!         .await?;
//!     for record in &records.records {
//!         println!("{:?} {:?}", record.name, record.record_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Encoding Changes
//!
//! ```rust
//! use route53_orchestrator_provider::{
//!     ChangeAction, ChangeBatch, RecordType, ResourceRecordSet, encode_change_batch,
//! };
//!
//! let record = ResourceRecordSet::new("www.example.com.", RecordType::A)
//!     .with_ttl(300)
//!     .with_values(["192.0.2.1"]);
//! let xml = encode_change_batch(&ChangeBatch::single(ChangeAction::Upsert, record))?;
//! assert!(xml.contains("<Action>UPSERT</Action>"));
//! # Ok::<(), route53_orchestrator_provider::ProviderError>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::HostedZoneNotFound`]: unknown hosted zone
//! - [`ProviderError::ChangeNotFound`] / [`ProviderError::DelegationSetNotFound`]: unknown change or delegation set
//! - [`ProviderError::InvalidChangeBatch`]: Route 53 rejected a change batch
//! - [`ProviderError::RateLimited`]: throttled (retryable)
//! - [`ProviderError::NetworkError`]: network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are automatically
//! retried with exponential backoff by [`SigV4Executor`].

mod codec;
mod config;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;
mod xml;

/// Provider identifier carried by every [`ProviderError`].
pub(crate) const PROVIDER_NAME: &str = "route53";

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export codec
pub use codec::{
    ROUTE53_XML_NAMESPACE, build_change_batch_envelope, build_change_item_xml,
    build_create_hosted_zone_xml, encode_change, encode_change_batch,
};

// Re-export config
pub use config::{
    ClientConfig, ClientConfigBuilder, ROUTE53_API_VERSION, ROUTE53_HOST, ROUTE53_REGION,
    ROUTE53_SERVICE,
};

// Re-export public traits (error mapping stays internal)
pub use traits::{HostedZoneApi, RequestExecutor, XmlParser};

// Re-export types
pub use types::{
    AliasTarget, ApiRequest, ApiResponse, ChangeAction, ChangeBatch, ChangeInfo, ChangeItem,
    ChangeStatus, CreateHostedZoneRequest, CreatedHostedZone, Credentials, DelegationSet,
    DelegationSetPage, Failover, GeoLocation, HostedZone, HostedZoneDetail, HostedZonePage,
    HttpMethod, RecordSetPage, RecordType, RecordTypeFilter, ResourceRecord, ResourceRecordSet,
    ResourceRecords,
};

// Re-export XML tree
pub use xml::{QuickXmlParser, XmlNode};

// Re-export helpers
pub use providers::common::normalize_resource_id;

// Re-export the Route 53 client
pub use providers::{Route53Client, Route53ClientBuilder, SigV4Executor};
