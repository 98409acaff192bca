//! 记录集管理服务

use std::sync::Arc;

use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, ChangeInfo, RecordSetPage, RecordTypeFilter, ResourceRecordSet,
    encode_change,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// 记录集管理服务
pub struct RecordSetService {
    ctx: Arc<ServiceContext>,
}

impl RecordSetService {
    /// 创建记录集服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出托管区域的记录集（第一页）
    ///
    /// `type_list` 为逗号分隔的类型列表（如 `"A,MX"`），空串表示全部类型。
    pub async fn list_record_sets(
        &self,
        zone_id: &str,
        type_list: &str,
    ) -> CoreResult<RecordSetPage> {
        let filter = RecordTypeFilter::parse(type_list);
        match self.ctx.api.list_record_sets(zone_id, &filter).await {
            Ok(page) => Ok(page),
            Err(e) => Err(self.ctx.handle_provider_error("list_record_sets", e)),
        }
    }

    /// 提交一批变更
    ///
    /// 每个 `(记录集, 动作)` 先经编码校验（动作区分大小写、记录集非空），
    /// 全部通过后才发送一次变更请求。
    pub async fn apply_changes(
        &self,
        zone_id: &str,
        changes: Vec<(ResourceRecordSet, String)>,
        comment: Option<String>,
    ) -> CoreResult<ChangeInfo> {
        if changes.is_empty() {
            return Err(CoreError::ValidationError(
                "at least one change is required".to_string(),
            ));
        }

        let mut batch = ChangeBatch::new();
        batch.comment = comment;
        for (record, action) in changes {
            let action: ChangeAction = action.parse()?;
            encode_change(&record, action)?;
            batch.push(action, record);
        }

        match self.ctx.api.change_record_sets(zone_id, &batch).await {
            Ok(info) => Ok(info),
            Err(e) => Err(self.ctx.handle_provider_error("change_record_sets", e)),
        }
    }

    /// 查询变更状态
    pub async fn get_change(&self, change_id: &str) -> CoreResult<ChangeInfo> {
        match self.ctx.api.get_change(change_id).await {
            Ok(info) => Ok(info),
            Err(e) => Err(self.ctx.handle_provider_error("get_change", e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{ApiCall, MockZoneApi, apex_records, create_test_context, mutable_record};
    use route53_orchestrator_provider::{ChangeStatus, ProviderError, RecordType};

    fn service(api: &Arc<MockZoneApi>) -> RecordSetService {
        RecordSetService::new(create_test_context(api.clone()))
    }

    fn seeded_api() -> Arc<MockZoneApi> {
        let api = MockZoneApi::new();
        let mut records = apex_records("example.com.");
        records.push(mutable_record("example.com.", RecordType::Mx));
        records.push(mutable_record("a.example.com.", RecordType::A));
        records.push(mutable_record("t.example.com.", RecordType::Txt));
        api.set_records("Z1", records);
        Arc::new(api)
    }

    #[tokio::test]
    async fn list_filters_by_type_list() {
        let api = seeded_api();
        let page = service(&api)
            .list_record_sets("/hostedzone/Z1", "a, mx")
            .await
            .unwrap();

        let types: Vec<_> = page.records.iter().filter_map(|r| r.record_type).collect();
        assert_eq!(types, vec![RecordType::Mx, RecordType::A]);
    }

    #[tokio::test]
    async fn empty_type_list_returns_all() {
        let api = seeded_api();
        let page = service(&api).list_record_sets("Z1", "").await.unwrap();
        assert_eq!(page.records.len(), 5);
    }

    #[tokio::test]
    async fn apply_changes_submits_one_batch() {
        let api = seeded_api();
        let info = service(&api)
            .apply_changes(
                "Z1",
                vec![
                    (mutable_record("b.example.com.", RecordType::A), "CREATE".to_string()),
                    (mutable_record("t.example.com.", RecordType::Txt), "DELETE".to_string()),
                ],
                Some("rotate".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(info.status, ChangeStatus::Pending);
        assert_eq!(api.change_calls(), 1);
        let batch = api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                ApiCall::ChangeRecordSets { batch, .. } => Some(batch),
                _ => None,
            })
            .unwrap();
        assert_eq!(batch.comment.as_deref(), Some("rotate"));
        assert_eq!(batch.changes[0].action, ChangeAction::Create);
        assert_eq!(batch.changes[1].action, ChangeAction::Delete);
    }

    #[tokio::test]
    async fn lowercase_action_is_rejected_before_any_call() {
        let api = seeded_api();
        let result = service(&api)
            .apply_changes(
                "Z1",
                vec![(
                    mutable_record("b.example.com.", RecordType::A),
                    "create".to_string(),
                )],
                None,
            )
            .await;

        assert!(matches!(
            result,
            Err(CoreError::Provider(ProviderError::InvalidChangeAction { ref action, .. }))
                if action == "create"
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_record_is_rejected_before_any_call() {
        let api = seeded_api();
        let result = service(&api)
            .apply_changes(
                "Z1",
                vec![
                    (mutable_record("b.example.com.", RecordType::A), "UPSERT".to_string()),
                    (ResourceRecordSet::default(), "DELETE".to_string()),
                ],
                None,
            )
            .await;

        assert!(matches!(
            result,
            Err(CoreError::Provider(ProviderError::EmptyRecordSet { .. }))
        ));
        assert_eq!(api.change_calls(), 0);
    }

    #[tokio::test]
    async fn no_changes_is_validation_error() {
        let api = seeded_api();
        let result = service(&api).apply_changes("Z1", Vec::new(), None).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn get_change_strips_prefix() {
        let api = seeded_api();
        let info = service(&api).get_change("/change/C9").await.unwrap();
        assert_eq!(info.id, "C9");
        assert_eq!(info.status, ChangeStatus::Insync);
    }
}
