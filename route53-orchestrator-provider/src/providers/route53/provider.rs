//! Route 53 `HostedZoneApi` implementation

use async_trait::async_trait;

use crate::codec::{build_create_hosted_zone_xml, encode_change_batch};
use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_resource_id;
use crate::traits::{ErrorContext, HostedZoneApi};
use crate::types::{
    ChangeBatch, ChangeInfo, CreateHostedZoneRequest, CreatedHostedZone, DelegationSet,
    DelegationSetPage, HostedZoneDetail, HostedZonePage, HttpMethod, RecordSetPage,
    RecordTypeFilter,
};

use super::{Route53Client, decode};

impl Route53Client {
    /// `maxitems` plus an optional `marker`.
    fn page_query(&self, marker: Option<&str>) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(marker) = marker.filter(|m| !m.is_empty()) {
            query.push(("marker".to_string(), marker.to_string()));
        }
        if let Some(max_items) = self.config.max_items() {
            query.push(("maxitems".to_string(), max_items.to_string()));
        }
        query
    }

    fn checked_id<'a>(zone_id: &'a str, param: &str) -> Result<&'a str> {
        let id = normalize_resource_id(zone_id);
        if id.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: crate::PROVIDER_NAME.to_string(),
                param: param.to_string(),
                detail: "identifier is empty".to_string(),
            });
        }
        Ok(id)
    }
}

#[async_trait]
impl HostedZoneApi for Route53Client {
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<HostedZonePage> {
        let root = self
            .call(
                HttpMethod::Get,
                "hostedzone",
                self.page_query(marker),
                None,
                ErrorContext::default(),
            )
            .await?;
        let page = decode::hosted_zone_page(&root)?;

        log::debug!(
            "[{}] Listed {} hosted zones (truncated: {})",
            crate::PROVIDER_NAME,
            page.zones.len(),
            page.truncated
        );
        Ok(page)
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZoneDetail> {
        let id = Self::checked_id(zone_id, "zone_id")?;
        let root = self
            .call(
                HttpMethod::Get,
                &format!("hostedzone/{id}"),
                Vec::new(),
                None,
                ErrorContext::zone(id),
            )
            .await?;
        decode::hosted_zone_detail(&root)
    }

    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest) -> Result<CreatedHostedZone> {
        if req.name.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: crate::PROVIDER_NAME.to_string(),
                param: "name".to_string(),
                detail: "zone name is empty".to_string(),
            });
        }

        let caller_reference = req
            .caller_reference
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let body = build_create_hosted_zone_xml(req, &caller_reference);

        let root = self
            .call(
                HttpMethod::Post,
                "hostedzone",
                Vec::new(),
                Some(body),
                ErrorContext::default(),
            )
            .await?;
        let created = decode::created_hosted_zone(&root)?;

        log::info!(
            "[{}] Created hosted zone {} ({})",
            crate::PROVIDER_NAME,
            created.zone.name,
            created.zone.id
        );
        Ok(created)
    }

    async fn delete_hosted_zone(&self, zone_id: &str) -> Result<ChangeInfo> {
        let id = Self::checked_id(zone_id, "zone_id")?;
        let root = self
            .call(
                HttpMethod::Delete,
                &format!("hostedzone/{id}"),
                Vec::new(),
                None,
                ErrorContext::zone(id),
            )
            .await?;
        let info = decode::change_info_response(&root)?;

        log::info!("[{}] Deleted hosted zone {id}", crate::PROVIDER_NAME);
        Ok(info)
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        include_types: &RecordTypeFilter,
    ) -> Result<RecordSetPage> {
        let id = Self::checked_id(zone_id, "zone_id")?;
        let root = self
            .call(
                HttpMethod::Get,
                &format!("hostedzone/{id}/rrset"),
                self.page_query(None),
                None,
                ErrorContext::zone(id),
            )
            .await?;

        let mut page = decode::record_set_page(&root);
        let total = page.records.len();
        page.records.retain(|record| include_types.matches(record));

        log::debug!(
            "[{}] Zone {id}: {} of {total} record sets kept by filter {:?}",
            crate::PROVIDER_NAME,
            page.records.len(),
            include_types.types()
        );
        Ok(page)
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let id = Self::checked_id(zone_id, "zone_id")?;
        let body = encode_change_batch(batch)?;

        let root = self
            .call(
                HttpMethod::Post,
                &format!("hostedzone/{id}/rrset/"),
                Vec::new(),
                Some(body),
                ErrorContext::zone(id),
            )
            .await?;
        let info = decode::change_info_response(&root)?;

        log::info!(
            "[{}] Submitted {} change(s) to zone {id}: {}",
            crate::PROVIDER_NAME,
            batch.len(),
            info.id
        );
        Ok(info)
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo> {
        let id = Self::checked_id(change_id, "change_id")?;
        let root = self
            .call(
                HttpMethod::Get,
                &format!("change/{id}"),
                Vec::new(),
                None,
                ErrorContext::change(id),
            )
            .await?;
        decode::change_info_response(&root)
    }

    async fn list_reusable_delegation_sets(
        &self,
        marker: Option<&str>,
    ) -> Result<DelegationSetPage> {
        let root = self
            .call(
                HttpMethod::Get,
                "delegationset",
                self.page_query(marker),
                None,
                ErrorContext::default(),
            )
            .await?;
        Ok(decode::delegation_set_page(&root))
    }

    async fn get_reusable_delegation_set(&self, delegation_set_id: &str) -> Result<DelegationSet> {
        let id = Self::checked_id(delegation_set_id, "delegation_set_id")?;
        let root = self
            .call(
                HttpMethod::Get,
                &format!("delegationset/{id}"),
                Vec::new(),
                None,
                ErrorContext::delegation_set(id),
            )
            .await?;
        decode::delegation_set_response(&root)
    }
}
