use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    ApiRequest, ApiResponse, ChangeBatch, ChangeInfo, CreateHostedZoneRequest, CreatedHostedZone,
    Credentials, DelegationSet, DelegationSetPage, HostedZoneDetail, HostedZonePage,
    RecordSetPage, RecordTypeFilter,
};
use crate::xml::XmlNode;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（如 `NoSuchHostedZone`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 托管区域 ID（用于 `HostedZoneNotFound` 等错误）
    pub zone_id: Option<String>,
    /// 变更 ID（用于 `ChangeNotFound`）
    pub change_id: Option<String>,
    /// 可复用委托集 ID（用于 `DelegationSetNotFound`）
    pub delegation_set_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            ..Self::default()
        }
    }

    pub fn change(change_id: &str) -> Self {
        Self {
            change_id: Some(change_id.to_string()),
            ..Self::default()
        }
    }

    pub fn delegation_set(delegation_set_id: &str) -> Self {
        Self {
            delegation_set_id: Some(delegation_set_id.to_string()),
            ..Self::default()
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Signed HTTP transport.
///
/// Implementations own signing, connection handling, timeouts and retry. Callers only see
/// the final status and body. [`SigV4Executor`](crate::SigV4Executor) is the default.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute one request and return its raw response.
    ///
    /// Non-2xx statuses are returned as `Ok`; only transport failures are errors.
    async fn execute(&self, request: &ApiRequest, credentials: &Credentials)
    -> Result<ApiResponse>;
}

/// Parses raw XML bodies into a generic tree.
pub trait XmlParser: Send + Sync {
    /// Parse a full document and return its root element.
    fn parse(&self, raw: &str) -> Result<XmlNode>;
}

/// Hosted zone and record set operations.
///
/// Every identifier argument may carry a path-style prefix (`/hostedzone/Z123`); it is
/// normalized before use.
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    /// Fetch one page of hosted zones starting at `marker`.
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<HostedZonePage>;

    /// Fetch a hosted zone and its delegation set.
    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZoneDetail>;

    /// Create a hosted zone.
    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest) -> Result<CreatedHostedZone>;

    /// Delete an empty hosted zone.
    async fn delete_hosted_zone(&self, zone_id: &str) -> Result<ChangeInfo>;

    /// List the first page of record sets, filtered client-side by type.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        include_types: &RecordTypeFilter,
    ) -> Result<RecordSetPage>;

    /// Submit a change batch.
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;

    /// Fetch the status of a submitted change.
    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo>;

    /// Fetch one page of reusable delegation sets.
    async fn list_reusable_delegation_sets(
        &self,
        marker: Option<&str>,
    ) -> Result<DelegationSetPage>;

    /// Fetch a reusable delegation set.
    async fn get_reusable_delegation_set(&self, delegation_set_id: &str) -> Result<DelegationSet>;
}
