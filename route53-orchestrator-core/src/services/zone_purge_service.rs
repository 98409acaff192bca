//! 托管区域清理服务
//!
//! 删除区域内所有可变记录集（SOA / NS 由 Route 53 管理，始终保留），
//! 以及在清理完成后删除托管区域本身。

use std::sync::Arc;

use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, RecordSetPage, RecordTypeFilter, normalize_resource_id,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{DecommissionReport, PurgeReport};
use crate::utils::cancel::CancelSignal;

/// 托管区域清理服务
pub struct ZonePurgeService {
    ctx: Arc<ServiceContext>,
}

impl ZonePurgeService {
    /// 创建清理服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    fn normalized_zone_id(zone_id: &str) -> CoreResult<String> {
        let id = normalize_resource_id(zone_id);
        if id.is_empty() {
            return Err(CoreError::ValidationError("zone id is empty".to_string()));
        }
        Ok(id.to_string())
    }

    /// 列出可变记录集（第一页）
    async fn list_mutable(
        &self,
        zone_id: &str,
        cancel: &CancelSignal,
    ) -> CoreResult<RecordSetPage> {
        cancel.check()?;
        self.ctx
            .api
            .list_record_sets(zone_id, &RecordTypeFilter::mutable())
            .await
            .map_err(|e| self.ctx.handle_provider_error("list_record_sets", e))
    }

    /// 逐条删除区域内的可变记录集
    ///
    /// 每条记录一次 DELETE 变更请求，按列表顺序串行执行。第 k 条失败时立即停止，
    /// 返回 `CoreError::PurgeInterrupted { processed: k, deleted: k - 1, .. }`。
    pub async fn purge_zone_records(
        &self,
        zone_id: &str,
        cancel: &CancelSignal,
    ) -> CoreResult<PurgeReport> {
        let zone_id = Self::normalized_zone_id(zone_id)?;
        let page = self.list_mutable(&zone_id, cancel).await?;

        if page.records.is_empty() {
            log::info!("Zone {zone_id} has no mutable record sets to purge");
            return Ok(PurgeReport {
                zone_id,
                deleted_count: 0,
                truncated: page.truncated,
            });
        }

        let total = page.records.len();
        let mut deleted = 0;

        for (index, record) in page.records.into_iter().enumerate() {
            cancel.check()?;

            log::debug!(
                "Deleting record set {}/{total} in zone {zone_id}: {:?} {:?}",
                index + 1,
                record.name,
                record.record_type
            );
            let batch = ChangeBatch::single(ChangeAction::Delete, record);
            if let Err(source) = self.ctx.api.change_record_sets(&zone_id, &batch).await {
                log::error!(
                    "Purge of zone {zone_id} stopped at record set {}/{total}: {source}",
                    index + 1
                );
                return Err(CoreError::PurgeInterrupted {
                    zone_id,
                    processed: index + 1,
                    deleted,
                    source,
                });
            }
            deleted += 1;
        }

        log::info!(
            "Purged {deleted} record set(s) from zone {zone_id} (truncated: {})",
            page.truncated
        );
        Ok(PurgeReport {
            zone_id,
            deleted_count: deleted,
            truncated: page.truncated,
        })
    }

    /// 一次变更请求删除全部可变记录集
    ///
    /// Route 53 原子地应用整个批次：失败时没有记录被删除。
    pub async fn purge_zone_records_batched(
        &self,
        zone_id: &str,
        cancel: &CancelSignal,
    ) -> CoreResult<PurgeReport> {
        let zone_id = Self::normalized_zone_id(zone_id)?;
        let page = self.list_mutable(&zone_id, cancel).await?;

        if page.records.is_empty() {
            log::info!("Zone {zone_id} has no mutable record sets to purge");
            return Ok(PurgeReport {
                zone_id,
                deleted_count: 0,
                truncated: page.truncated,
            });
        }

        let total = page.records.len();
        let mut batch = ChangeBatch::new().with_comment(format!("purge {total} record set(s)"));
        for record in page.records {
            batch.push(ChangeAction::Delete, record);
        }

        cancel.check()?;
        if let Err(source) = self.ctx.api.change_record_sets(&zone_id, &batch).await {
            log::error!("Batched purge of zone {zone_id} rejected: {source}");
            return Err(CoreError::PurgeInterrupted {
                zone_id,
                processed: total,
                deleted: 0,
                source,
            });
        }

        log::info!("Purged {total} record set(s) from zone {zone_id} in one batch");
        Ok(PurgeReport {
            zone_id,
            deleted_count: total,
            truncated: page.truncated,
        })
    }

    /// 清理记录集后删除托管区域
    ///
    /// 记录集列表被截断时拒绝删除（区域仍有未清理的记录集），调用方可再次调用。
    pub async fn decommission_zone(
        &self,
        zone_id: &str,
        cancel: &CancelSignal,
    ) -> CoreResult<DecommissionReport> {
        let purge = self.purge_zone_records(zone_id, cancel).await?;

        if purge.truncated {
            log::warn!(
                "Zone {} still has record sets beyond the first listing page, not deleting",
                purge.zone_id
            );
            return Err(CoreError::ValidationError(format!(
                "zone {} still has record sets after purging {}; run the purge again",
                purge.zone_id, purge.deleted_count
            )));
        }

        cancel.check()?;
        let change_info = self
            .ctx
            .api
            .delete_hosted_zone(&purge.zone_id)
            .await
            .map_err(|e| self.ctx.handle_provider_error("delete_hosted_zone", e))?;

        log::info!("Decommissioned zone {}", purge.zone_id);
        Ok(DecommissionReport { purge, change_info })
    }
}
