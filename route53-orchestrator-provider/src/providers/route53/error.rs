//! Route 53 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Client;

/// Route 53 错误码映射
/// 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53Client {
    fn provider_name(&self) -> &'static str {
        crate::PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "UnrecognizedClientException"
                | "ExpiredToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限被拒绝 ============
            Some("AccessDenied" | "AccessDeniedException" | "NotAuthorizedException") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 资源不存在 ============
            Some("NoSuchHostedZone") => ProviderError::HostedZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("NoSuchChange") => ProviderError::ChangeNotFound {
                provider: self.provider_name().to_string(),
                change_id: context.change_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("NoSuchDelegationSet") => ProviderError::DelegationSetNotFound {
                provider: self.provider_name().to_string(),
                delegation_set_id: context.delegation_set_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 托管区域非空 ============
            Some("HostedZoneNotEmpty") => ProviderError::HostedZoneNotEmpty {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 变更批次被拒绝 ============
            Some("InvalidChangeBatch" | "InvalidInput") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "name".to_string(),
                detail: raw.message,
            },
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "callerReference".to_string(),
                    detail: raw.message,
                }
            }
            Some("InvalidArgument" | "InvalidPaginationToken") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "marker".to_string(),
                detail: raw.message,
            },

            // ============ 频率限流（可重试） ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
