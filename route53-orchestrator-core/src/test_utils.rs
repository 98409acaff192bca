//! 测试辅助模块
//!
//! 提供脚本化的 `HostedZoneApi` mock 和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, CreateHostedZoneRequest,
    CreatedHostedZone, DelegationSet, DelegationSetPage, HostedZone, HostedZoneApi,
    HostedZoneDetail, HostedZonePage, ProviderError, RecordSetPage, RecordType,
    RecordTypeFilter, ResourceRecordSet, Result, normalize_resource_id,
};

use crate::services::ServiceContext;
use crate::utils::cancel::CancelHandle;

// ===== ApiCall =====

/// mock 记录的一次 API 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListHostedZones { marker: Option<String> },
    GetHostedZone(String),
    CreateHostedZone(String),
    DeleteHostedZone(String),
    ListRecordSets { zone_id: String, types: Vec<RecordType> },
    ChangeRecordSets { zone_id: String, batch: ChangeBatch },
    GetChange(String),
    ListDelegationSets,
    GetDelegationSet(String),
}

// ===== MockZoneApi =====

#[derive(Default)]
struct MockState {
    zone_pages: Vec<Vec<HostedZone>>,
    records: HashMap<String, Vec<ResourceRecordSet>>,
    truncated: HashMap<String, bool>,
    calls: Vec<ApiCall>,
    zone_list_failure: Option<(usize, ProviderError)>,
    change_failure: Option<(usize, ProviderError)>,
    cancel_after: Option<(usize, CancelHandle)>,
}

/// 脚本化的托管区域 API
///
/// 区域列表页按 `push_zone_page` 顺序返回，游标为 `page-{n}`；
/// 记录集按区域保存，成功的 DELETE 会把记录从区域中移除。
#[derive(Default)]
pub struct MockZoneApi {
    state: Mutex<MockState>,
}

impl MockZoneApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// 追加一页托管区域
    pub fn push_zone_page(&self, zones: Vec<HostedZone>) {
        self.state().zone_pages.push(zones);
    }

    /// 设置区域的记录集
    pub fn set_records(&self, zone_id: &str, records: Vec<ResourceRecordSet>) {
        self.state().records.insert(zone_id.to_string(), records);
    }

    /// 设置区域记录集列表是否截断
    pub fn set_truncated(&self, zone_id: &str, truncated: bool) {
        self.state().truncated.insert(zone_id.to_string(), truncated);
    }

    /// 第 `n` 次区域列表调用（从 1 开始）返回错误
    pub fn fail_zone_list_at(&self, n: usize, err: ProviderError) {
        self.state().zone_list_failure = Some((n, err));
    }

    /// 第 `n` 次变更调用（从 1 开始）返回错误
    pub fn fail_change_at(&self, n: usize, err: ProviderError) {
        self.state().change_failure = Some((n, err));
    }

    /// 第 `n` 次调用（任意类型）完成后触发取消
    pub fn cancel_after_calls(&self, n: usize, handle: CancelHandle) {
        self.state().cancel_after = Some((n, handle));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state().calls.clone()
    }

    pub fn zone_list_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::ListHostedZones { .. }))
    }

    pub fn record_list_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::ListRecordSets { .. }))
    }

    pub fn change_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::ChangeRecordSets { .. }))
    }

    /// 区域当前剩余的记录集
    pub fn records(&self, zone_id: &str) -> Vec<ResourceRecordSet> {
        self.state().records.get(zone_id).cloned().unwrap_or_default()
    }

    fn count(&self, pred: impl Fn(&ApiCall) -> bool) -> usize {
        self.state().calls.iter().filter(|c| pred(c)).count()
    }

    /// 记录一次调用，返回同类调用的序号；到达阈值时触发取消
    fn record(&self, call: ApiCall) -> usize {
        let mut state = self.state();
        let kind = std::mem::discriminant(&call);
        state.calls.push(call);
        let total = state.calls.len();
        if let Some((n, handle)) = &state.cancel_after
            && total >= *n
        {
            handle.cancel();
        }
        state
            .calls
            .iter()
            .filter(|c| std::mem::discriminant(*c) == kind)
            .count()
    }

    fn change_info(id: &str) -> ChangeInfo {
        ChangeInfo {
            id: id.to_string(),
            status: ChangeStatus::Pending,
            submitted_at: None,
            comment: None,
        }
    }
}

#[async_trait]
impl HostedZoneApi for MockZoneApi {
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<HostedZonePage> {
        let n = self.record(ApiCall::ListHostedZones {
            marker: marker.map(str::to_string),
        });
        let state = self.state();
        if let Some((at, err)) = &state.zone_list_failure
            && *at == n
        {
            return Err(err.clone());
        }

        let index = marker
            .and_then(|m| m.strip_prefix("page-"))
            .and_then(|i| i.parse::<usize>().ok())
            .unwrap_or(0);
        let zones = state.zone_pages.get(index).cloned().unwrap_or_default();
        let has_next = index + 1 < state.zone_pages.len();

        Ok(HostedZonePage {
            zones,
            truncated: has_next,
            next_marker: has_next.then(|| format!("page-{}", index + 1)),
        })
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZoneDetail> {
        let id = normalize_resource_id(zone_id).to_string();
        self.record(ApiCall::GetHostedZone(id.clone()));
        Ok(HostedZoneDetail {
            zone: HostedZone::new(id, "example.com."),
            delegation_set: None,
        })
    }

    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest) -> Result<CreatedHostedZone> {
        self.record(ApiCall::CreateHostedZone(req.name.clone()));
        Ok(CreatedHostedZone {
            zone: HostedZone::new("ZNEW", format!("{}.", req.name)),
            change_info: Self::change_info("CCREATE"),
            delegation_set: None,
        })
    }

    async fn delete_hosted_zone(&self, zone_id: &str) -> Result<ChangeInfo> {
        let id = normalize_resource_id(zone_id).to_string();
        self.record(ApiCall::DeleteHostedZone(id.clone()));
        if self
            .records(&id)
            .iter()
            .any(|r| r.record_type.is_some_and(RecordType::is_mutable))
        {
            return Err(ProviderError::HostedZoneNotEmpty {
                provider: "route53".to_string(),
                zone_id: id,
                raw_message: None,
            });
        }
        Ok(Self::change_info("CDELETE"))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        include_types: &RecordTypeFilter,
    ) -> Result<RecordSetPage> {
        let id = normalize_resource_id(zone_id).to_string();
        self.record(ApiCall::ListRecordSets {
            zone_id: id.clone(),
            types: include_types.types().to_vec(),
        });
        let state = self.state();
        let records = state
            .records
            .get(&id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| include_types.matches(r))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(RecordSetPage {
            records,
            truncated: state.truncated.get(&id).copied().unwrap_or(false),
            ..RecordSetPage::default()
        })
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let id = normalize_resource_id(zone_id).to_string();
        let n = self.record(ApiCall::ChangeRecordSets {
            zone_id: id.clone(),
            batch: batch.clone(),
        });
        let mut state = self.state();
        if let Some((at, err)) = &state.change_failure
            && *at == n
        {
            return Err(err.clone());
        }

        if let Some(records) = state.records.get_mut(&id) {
            for item in &batch.changes {
                match item.action {
                    ChangeAction::Delete => records.retain(|r| *r != item.record),
                    ChangeAction::Create | ChangeAction::Upsert => {
                        records.push(item.record.clone());
                    }
                }
            }
        }
        Ok(Self::change_info(&format!("C{n}")))
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo> {
        let id = normalize_resource_id(change_id).to_string();
        self.record(ApiCall::GetChange(id.clone()));
        let mut info = Self::change_info(&id);
        info.status = ChangeStatus::Insync;
        Ok(info)
    }

    async fn list_reusable_delegation_sets(
        &self,
        _marker: Option<&str>,
    ) -> Result<DelegationSetPage> {
        self.record(ApiCall::ListDelegationSets);
        Ok(DelegationSetPage::default())
    }

    async fn get_reusable_delegation_set(&self, delegation_set_id: &str) -> Result<DelegationSet> {
        let id = normalize_resource_id(delegation_set_id).to_string();
        self.record(ApiCall::GetDelegationSet(id.clone()));
        Ok(DelegationSet {
            id: Some(id),
            ..DelegationSet::default()
        })
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context(api: Arc<MockZoneApi>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(api))
}

/// 创建测试托管区域
pub fn zone(id: &str, name: &str) -> HostedZone {
    HostedZone::new(id, name)
}

/// 创建带 TTL 和值的记录集
pub fn mutable_record(name: &str, record_type: RecordType) -> ResourceRecordSet {
    let value = match record_type {
        RecordType::Mx => "10 mail.example.com.",
        RecordType::Txt => "\"v=spf1 -all\"",
        RecordType::Cname => "target.example.com.",
        _ => "192.0.2.1",
    };
    ResourceRecordSet::new(name, record_type)
        .with_ttl(300)
        .with_values([value])
}

/// SOA + NS 顶点记录
pub fn apex_records(zone_name: &str) -> Vec<ResourceRecordSet> {
    vec![
        ResourceRecordSet::new(zone_name, RecordType::Soa)
            .with_ttl(900)
            .with_values([
                "ns-1.awsdns-01.org. hostmaster.example.com. 1 7200 900 1209600 86400",
            ]),
        ResourceRecordSet::new(zone_name, RecordType::Ns)
            .with_ttl(172_800)
            .with_values(["ns-1.awsdns-01.org.", "ns-2.awsdns-02.com."]),
    ]
}
