use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

// ============ Record Types ============

/// DNS record type supported by Route 53 record sets.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Naming authority pointer record.
    Naptr,
    /// Name server record.
    Ns,
    /// Reverse-lookup pointer record.
    Ptr,
    /// Start of authority record.
    Soa,
    /// Sender policy framework record.
    Spf,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
}

impl RecordType {
    /// Every record type, in alphabetical order.
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::Aaaa,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Naptr,
        Self::Ns,
        Self::Ptr,
        Self::Soa,
        Self::Spf,
        Self::Srv,
        Self::Txt,
    ];

    /// Record types a caller may delete. The provider owns the apex `SOA` and `NS` sets.
    pub const MUTABLE: [Self; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Naptr,
        Self::Ptr,
        Self::Spf,
        Self::Srv,
        Self::Txt,
    ];

    /// Wire literal of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Naptr => "NAPTR",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }

    /// Case-insensitive lookup of a record type literal.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    /// Whether records of this type may be deleted by callers.
    pub fn is_mutable(self) -> bool {
        !matches!(self, Self::Soa | Self::Ns)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProviderError::InvalidParameter {
            provider: crate::PROVIDER_NAME.to_string(),
            param: "record_type".to_string(),
            detail: format!("unsupported record type: {s}"),
        })
    }
}

/// Client-side record type filter applied to record set listings.
///
/// An empty filter accepts every record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTypeFilter {
    types: Vec<RecordType>,
}

impl RecordTypeFilter {
    /// Filter that accepts everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter restricted to the given types.
    pub fn from_types(types: impl IntoIterator<Item = RecordType>) -> Self {
        let mut filter = Self::default();
        for t in types {
            if !filter.types.contains(&t) {
                filter.types.push(t);
            }
        }
        filter
    }

    /// Filter restricted to [`RecordType::MUTABLE`].
    pub fn mutable() -> Self {
        Self::from_types(RecordType::MUTABLE)
    }

    /// Parse a comma separated type list such as `"A,mx, TXT"`.
    ///
    /// Matching is case-insensitive. Unknown tokens are dropped.
    pub fn parse(list: &str) -> Self {
        let types = list
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let parsed = RecordType::parse(token);
                if parsed.is_none() {
                    log::debug!("Ignoring unknown record type in filter: {token}");
                }
                parsed
            });
        Self::from_types(types)
    }

    /// Whether no restriction applies.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types accepted by this filter.
    pub fn types(&self) -> &[RecordType] {
        &self.types
    }

    /// Whether the record set passes the filter.
    ///
    /// A non-empty filter rejects record sets without a type.
    pub fn matches(&self, record: &ResourceRecordSet) -> bool {
        if self.types.is_empty() {
            return true;
        }
        record
            .record_type
            .is_some_and(|t| self.types.contains(&t))
    }
}

// ============ Record Sets ============

/// Routing role of a failover record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Failover {
    /// Answers while the primary is healthy.
    Primary,
    /// Answers when the primary is unhealthy.
    Secondary,
}

impl Failover {
    /// Wire literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
        }
    }

    /// Parse the wire literal.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PRIMARY" => Some(Self::Primary),
            "SECONDARY" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Alias to another AWS resource (load balancer, distribution, record set in the same zone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    /// Hosted zone of the alias target.
    pub hosted_zone_id: String,
    /// DNS name of the alias target.
    pub dns_name: String,
    /// Whether the alias inherits the health of its target.
    pub evaluate_target_health: bool,
}

/// Geolocation routing key. Only present codes are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Two-letter continent code (`EU`, `NA`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    /// ISO 3166 country code, or `*` for the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Subdivision (state) code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision_code: Option<String>,
}

/// One record value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Value in presentation format (`"192.0.2.1"`, `"10 mail.example.com."`).
    pub value: String,
}

impl ResourceRecord {
    /// Create a record value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Record values: a single value object or a sequence of them.
///
/// Both shapes encode to the same `<ResourceRecord>` children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceRecords {
    /// A sequence of values.
    Multiple(Vec<ResourceRecord>),
    /// A single value.
    Single(ResourceRecord),
}

impl ResourceRecords {
    /// Normalized view of the values.
    pub fn as_slice(&self) -> &[ResourceRecord] {
        match self {
            Self::Multiple(records) => records,
            Self::Single(record) => std::slice::from_ref(record),
        }
    }

    /// Whether no value is present.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<ResourceRecord> for ResourceRecords {
    fn from(record: ResourceRecord) -> Self {
        Self::Single(record)
    }
}

impl From<Vec<ResourceRecord>> for ResourceRecords {
    fn from(records: Vec<ResourceRecord>) -> Self {
        Self::Multiple(records)
    }
}

/// A resource record set with sparse fields.
///
/// Every field is optional; absence is distinct from empty strings or zero values and
/// only present fields are serialized by the change-batch codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecordSet {
    /// Fully-qualified record name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record type.
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<RecordType>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Weighted routing weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Latency routing region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Failover routing role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover: Option<Failover>,
    /// Distinguishes record sets sharing a name and type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    /// Associated health check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
    /// Traffic policy instance that created the record set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_policy_instance_id: Option<String>,
    /// Multivalue answer routing flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_value_answer: Option<bool>,
    /// Alias target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
    /// Geolocation routing key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<GeoLocation>,
    /// Record values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<ResourceRecords>,
}

impl ResourceRecordSet {
    /// Record set with a name and type, the usual starting point.
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: Some(name.into()),
            record_type: Some(record_type),
            ..Self::default()
        }
    }

    /// Set the TTL.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the record values.
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = values.into_iter().map(ResourceRecord::new).collect();
        self.resource_records = Some(ResourceRecords::Multiple(records));
        self
    }

    /// Whether no field is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============ Change Batches ============

/// Mutation applied to a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create a record set; fails if it exists.
    Create,
    /// Create or replace a record set.
    Upsert,
    /// Delete a record set; the values must match exactly.
    Delete,
}

impl ChangeAction {
    /// Wire literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Upsert => "UPSERT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeAction {
    type Err = ProviderError;

    /// Case-sensitive: only the exact uppercase literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPSERT" => Ok(Self::Upsert),
            "DELETE" => Ok(Self::Delete),
            other => Err(ProviderError::InvalidChangeAction {
                provider: crate::PROVIDER_NAME.to_string(),
                action: other.to_string(),
            }),
        }
    }
}

/// A record set paired with the action to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Target action.
    pub action: ChangeAction,
    /// Record set the action applies to.
    pub record: ResourceRecordSet,
}

impl ChangeItem {
    /// Create a change item.
    pub fn new(action: ChangeAction, record: ResourceRecordSet) -> Self {
        Self { action, record }
    }
}

/// Ordered set of changes submitted in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Optional batch comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Changes, applied in order.
    pub changes: Vec<ChangeItem>,
}

impl ChangeBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch holding exactly one change.
    pub fn single(action: ChangeAction, record: ResourceRecordSet) -> Self {
        Self {
            comment: None,
            changes: vec![ChangeItem::new(action, record)],
        }
    }

    /// Attach a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Append a change.
    pub fn push(&mut self, action: ChangeAction, record: ResourceRecordSet) {
        self.changes.push(ChangeItem::new(action, record));
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the batch has no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

// ============ Hosted Zones ============

/// A hosted zone returned by a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Normalized identifier (`Z1D633PJN98FT9`, without the `/hostedzone/` prefix).
    pub id: String,
    /// Fully-qualified zone name as returned by the provider (`example.com.`).
    pub name: String,
    /// Caller reference given at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Zone comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether the zone is private (VPC-scoped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_zone: Option<bool>,
    /// Number of record sets in the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_set_count: Option<u64>,
    /// Record sets attached by an extended search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_details: Option<RecordSetPage>,
}

impl HostedZone {
    /// Minimal zone with an id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            caller_reference: None,
            comment: None,
            private_zone: None,
            record_set_count: None,
            extended_details: None,
        }
    }
}

/// One page of hosted zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZonePage {
    /// Zones on this page.
    pub zones: Vec<HostedZone>,
    /// Whether more zones follow.
    pub truncated: bool,
    /// Marker for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl HostedZonePage {
    /// Continuation marker, treating an empty marker as absent.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_marker.as_deref().filter(|m| !m.is_empty())
    }
}

/// One page of record sets. Truncation is surfaced, never followed automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    /// Record sets, in provider order.
    pub records: Vec<ResourceRecordSet>,
    /// Whether the provider truncated the listing.
    pub truncated: bool,
    /// Name of the first record set on the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_record_name: Option<String>,
    /// Type of the first record set on the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_record_type: Option<RecordType>,
    /// Set identifier of the first record set on the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_record_identifier: Option<String>,
}

/// Hosted zone and the name servers delegated to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZoneDetail {
    /// The zone.
    pub zone: HostedZone,
    /// Delegation set, absent for private zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_set: Option<DelegationSet>,
}

/// Request to create a hosted zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostedZoneRequest {
    /// Zone name (`example.com`).
    pub name: String,
    /// Idempotency token. A random UUID is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Zone comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Reusable delegation set to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_set_id: Option<String>,
}

/// Result of creating a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedHostedZone {
    /// The new zone.
    pub zone: HostedZone,
    /// Propagation status of the creation.
    pub change_info: ChangeInfo,
    /// Name servers assigned to the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_set: Option<DelegationSet>,
}

// ============ Changes & Delegation Sets ============

/// Propagation status of a submitted change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Not yet applied to all authoritative servers.
    Pending,
    /// Applied everywhere.
    Insync,
}

/// Status record returned by mutation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Normalized change id (without `/change/`).
    pub id: String,
    /// Propagation status.
    pub status: ChangeStatus,
    /// Submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Batch comment echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Name servers assignable to hosted zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationSet {
    /// Normalized id; absent for a zone's non-reusable delegation set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller reference given at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Name server host names.
    pub name_servers: Vec<String>,
}

/// One page of reusable delegation sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationSetPage {
    /// Delegation sets on this page.
    pub delegation_sets: Vec<DelegationSet>,
    /// Whether more follow.
    pub truncated: bool,
    /// Marker for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

// ============ Credentials ============

/// AWS signing credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Access key id (`AKIA...`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Credentials {
    /// Long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and optionally `AWS_SESSION_TOKEN`.
    pub fn from_env() -> Option<Self> {
        let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let session_token = std::env::var("AWS_SESSION_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        Some(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

// ============ Transport Types ============

/// HTTP methods used by the hosted zone API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read.
    Get,
    /// Create / mutate.
    Post,
    /// Delete.
    Delete,
}

impl HttpMethod {
    /// Method literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-described request handed to a [`RequestExecutor`](crate::RequestExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Signing service name.
    pub service: String,
    /// Endpoint host.
    pub host: String,
    /// Signing region.
    pub region: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute path (`/2013-04-01/hostedzone`).
    pub path: String,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
    /// Extra headers (signing headers are added by the executor).
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`RequestExecutor`](crate::RequestExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
