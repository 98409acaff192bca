//! Route53 Orchestrator Core Library
//!
//! Provides the hosted zone workflows built on top of the provider client:
//! - Hosted zone search with page limits and optional record set details (`ZoneSearchService`)
//! - Record set listing and change submission (`RecordSetService`)
//! - Zone purge and decommission (`ZonePurgeService`)
//!
//! Services only depend on the [`HostedZoneApi`](route53_orchestrator_provider::HostedZoneApi)
//! trait, so they can run against `Route53Client` or any test double.
//! Long-running operations take a [`CancelSignal`] and stop with [`CoreError::Cancelled`].

pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{RecordSetService, ServiceContext, ZonePurgeService, ZoneSearchService};
pub use types::*;
pub use utils::cancel::{CancelHandle, CancelSignal};
