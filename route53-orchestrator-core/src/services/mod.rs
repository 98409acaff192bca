//! 业务逻辑服务层

mod record_set_service;
mod zone_purge_service;
mod zone_search_service;

pub use record_set_service::RecordSetService;
pub use zone_purge_service::ZonePurgeService;
pub use zone_search_service::ZoneSearchService;

use std::sync::Arc;

use route53_orchestrator_provider::{HostedZoneApi, ProviderError};

use crate::error::CoreError;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入 [`HostedZoneApi`] 实现（通常为 `Route53Client`）。
pub struct ServiceContext {
    /// 托管区域 API
    pub api: Arc<dyn HostedZoneApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn HostedZoneApi>) -> Self {
        Self { api }
    }

    /// 处理 Provider 错误：按是否预期选择日志级别
    pub fn handle_provider_error(&self, operation: &str, err: ProviderError) -> CoreError {
        if err.is_expected() {
            log::warn!("{operation} failed: {err}");
        } else {
            log::error!("{operation} failed: {err}");
        }
        CoreError::Provider(err)
    }
}
