//! 托管区域搜索服务

use std::sync::Arc;

use route53_orchestrator_provider::{HostedZone, RecordTypeFilter};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::SearchOptions;
use crate::utils::cancel::CancelSignal;

/// 托管区域搜索服务
///
/// 逐页拉取托管区域列表，按名称子串过滤，可选为每个匹配区域附加记录集。
pub struct ZoneSearchService {
    ctx: Arc<ServiceContext>,
}

impl ZoneSearchService {
    /// 创建搜索服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 搜索托管区域
    ///
    /// - 最多请求 `maximum_calls` 页；到达上限时静默返回已收集的结果
    /// - 每个匹配区域的记录集请求不计入页数
    /// - 每次请求前检查 `cancel`，已取消则返回 `CoreError::Cancelled`
    pub async fn search_hosted_zones(
        &self,
        options: &SearchOptions,
        cancel: &CancelSignal,
    ) -> CoreResult<Vec<HostedZone>> {
        let type_filter = RecordTypeFilter::parse(&options.extended_details_type_list);
        let mut results = Vec::new();
        let mut cursor: Option<String> = None;
        let mut calls: u32 = 0;

        loop {
            calls += 1;
            if calls > options.maximum_calls {
                log::debug!(
                    "Zone search stopped at the page limit ({}), {} zone(s) collected",
                    options.maximum_calls,
                    results.len()
                );
                break;
            }

            cancel.check()?;
            let page = match self.ctx.api.list_hosted_zones(cursor.as_deref()).await {
                Ok(page) => page,
                Err(e) => return Err(self.ctx.handle_provider_error("list_hosted_zones", e)),
            };

            let next = page.next_cursor().map(str::to_string);

            for mut zone in page.zones {
                if !zone.name.contains(options.search_string.as_str()) {
                    continue;
                }

                if options.get_extended_details {
                    cancel.check()?;
                    let records = match self.ctx.api.list_record_sets(&zone.id, &type_filter).await
                    {
                        Ok(records) => records,
                        Err(e) => {
                            return Err(self.ctx.handle_provider_error("list_record_sets", e));
                        }
                    };
                    zone.extended_details = Some(records);
                }

                results.push(zone);
            }

            match next {
                Some(marker) => cursor = Some(marker),
                None => break,
            }
        }

        log::debug!(
            "Zone search for {:?} matched {} zone(s) in {} page(s)",
            options.search_string,
            results.len(),
            calls.min(options.maximum_calls)
        );
        Ok(results)
    }
}
