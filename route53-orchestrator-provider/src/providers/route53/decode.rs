//! Response decoders: [`XmlNode`] trees into typed results
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/API_Operations_Amazon_Route_53.html>

use chrono::{DateTime, Utc};

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_resource_id;
use crate::traits::RawApiError;
use crate::types::{
    AliasTarget, ChangeInfo, ChangeStatus, CreatedHostedZone, DelegationSet, DelegationSetPage,
    Failover, GeoLocation, HostedZone, HostedZoneDetail, HostedZonePage, RecordSetPage,
    RecordType, ResourceRecord, ResourceRecords, ResourceRecordSet,
};
use crate::xml::XmlNode;

fn missing(element: &str, field: &str) -> ProviderError {
    ProviderError::ParseError {
        provider: crate::PROVIDER_NAME.to_string(),
        detail: format!("<{element}> is missing <{field}>"),
    }
}

fn required<'a>(node: &'a XmlNode, field: &str) -> Result<&'a str> {
    node.child_text(field)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| missing(node.name(), field))
}

fn required_child<'a>(node: &'a XmlNode, field: &str) -> Result<&'a XmlNode> {
    node.child(field).ok_or_else(|| missing(node.name(), field))
}

fn optional(node: &XmlNode, field: &str) -> Option<String> {
    node.child_text(field)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

// ============ Hosted Zones ============

/// `<HostedZone>`
pub(crate) fn hosted_zone(node: &XmlNode) -> Result<HostedZone> {
    let mut zone = HostedZone::new(
        normalize_resource_id(required(node, "Id")?),
        required(node, "Name")?,
    );
    zone.caller_reference = optional(node, "CallerReference");
    zone.record_set_count = node.child_parse("ResourceRecordSetCount");
    if let Some(config) = node.child("Config") {
        zone.comment = optional(config, "Comment");
        zone.private_zone = config.child_bool("PrivateZone");
    }
    Ok(zone)
}

/// `<ListHostedZonesResponse>`
pub(crate) fn hosted_zone_page(root: &XmlNode) -> Result<HostedZonePage> {
    let zones = match root.child("HostedZones") {
        Some(list) => list
            .children_named("HostedZone")
            .map(hosted_zone)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(HostedZonePage {
        zones,
        truncated: root.child_bool("IsTruncated").unwrap_or(false),
        next_marker: optional(root, "NextMarker"),
    })
}

/// `<GetHostedZoneResponse>`
pub(crate) fn hosted_zone_detail(root: &XmlNode) -> Result<HostedZoneDetail> {
    Ok(HostedZoneDetail {
        zone: hosted_zone(required_child(root, "HostedZone")?)?,
        delegation_set: root.child("DelegationSet").map(delegation_set),
    })
}

/// `<CreateHostedZoneResponse>`
pub(crate) fn created_hosted_zone(root: &XmlNode) -> Result<CreatedHostedZone> {
    Ok(CreatedHostedZone {
        zone: hosted_zone(required_child(root, "HostedZone")?)?,
        change_info: change_info(required_child(root, "ChangeInfo")?)?,
        delegation_set: root.child("DelegationSet").map(delegation_set),
    })
}

// ============ Record Sets ============

fn alias_target(node: &XmlNode) -> AliasTarget {
    AliasTarget {
        hosted_zone_id: node.child_text("HostedZoneId").unwrap_or_default().to_string(),
        dns_name: node.child_text("DNSName").unwrap_or_default().to_string(),
        evaluate_target_health: node.child_bool("EvaluateTargetHealth").unwrap_or(false),
    }
}

fn geo_location(node: &XmlNode) -> GeoLocation {
    GeoLocation {
        continent_code: optional(node, "ContinentCode"),
        country_code: optional(node, "CountryCode"),
        subdivision_code: optional(node, "SubdivisionCode"),
    }
}

/// `<ResourceRecordSet>`
///
/// Record types this crate does not model decode with `record_type: None`.
pub(crate) fn record_set(node: &XmlNode) -> ResourceRecordSet {
    let record_type = node.child_text("Type").and_then(|raw| {
        let parsed = RecordType::parse(raw);
        if parsed.is_none() {
            log::debug!("[{}] Unmodelled record type: {raw}", crate::PROVIDER_NAME);
        }
        parsed
    });

    let resource_records = node.child("ResourceRecords").map(|list| {
        ResourceRecords::Multiple(
            list.children_named("ResourceRecord")
                .filter_map(|r| r.child_text("Value"))
                .map(ResourceRecord::new)
                .collect(),
        )
    });

    ResourceRecordSet {
        name: optional(node, "Name"),
        record_type,
        ttl: node.child_parse("TTL"),
        weight: node.child_parse("Weight"),
        region: optional(node, "Region"),
        failover: node.child_text("Failover").and_then(Failover::parse),
        set_identifier: optional(node, "SetIdentifier"),
        health_check_id: optional(node, "HealthCheckId"),
        traffic_policy_instance_id: optional(node, "TrafficPolicyInstanceId"),
        multi_value_answer: node.child_bool("MultiValueAnswer"),
        alias_target: node.child("AliasTarget").map(alias_target),
        geo_location: node.child("GeoLocation").map(geo_location),
        resource_records,
    }
}

/// `<ListResourceRecordSetsResponse>`, unfiltered.
pub(crate) fn record_set_page(root: &XmlNode) -> RecordSetPage {
    let records = root
        .child("ResourceRecordSets")
        .map(|list| list.children_named("ResourceRecordSet").map(record_set).collect())
        .unwrap_or_default();

    RecordSetPage {
        records,
        truncated: root.child_bool("IsTruncated").unwrap_or(false),
        next_record_name: optional(root, "NextRecordName"),
        next_record_type: root.child_text("NextRecordType").and_then(RecordType::parse),
        next_record_identifier: optional(root, "NextRecordIdentifier"),
    }
}

// ============ Changes ============

/// `<ChangeInfo>`
pub(crate) fn change_info(node: &XmlNode) -> Result<ChangeInfo> {
    let status = match required(node, "Status")? {
        "PENDING" => ChangeStatus::Pending,
        "INSYNC" => ChangeStatus::Insync,
        other => {
            return Err(ProviderError::ParseError {
                provider: crate::PROVIDER_NAME.to_string(),
                detail: format!("Unknown change status: {other}"),
            });
        }
    };

    let submitted_at = node
        .child_text("SubmittedAt")
        .and_then(|t| DateTime::parse_from_rfc3339(t.trim()).ok())
        .map(|t| t.with_timezone(&Utc));

    Ok(ChangeInfo {
        id: normalize_resource_id(required(node, "Id")?).to_string(),
        status,
        submitted_at,
        comment: optional(node, "Comment"),
    })
}

/// `<ChangeInfo>` wrapped in any response root.
pub(crate) fn change_info_response(root: &XmlNode) -> Result<ChangeInfo> {
    change_info(required_child(root, "ChangeInfo")?)
}

// ============ Delegation Sets ============

/// `<DelegationSet>`
pub(crate) fn delegation_set(node: &XmlNode) -> DelegationSet {
    DelegationSet {
        id: node
            .child_text("Id")
            .filter(|t| !t.is_empty())
            .map(|id| normalize_resource_id(id).to_string()),
        caller_reference: optional(node, "CallerReference"),
        name_servers: node
            .child("NameServers")
            .map(|list| {
                list.children_named("NameServer")
                    .map(|ns| ns.text().to_string())
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// `<ListReusableDelegationSetsResponse>`
pub(crate) fn delegation_set_page(root: &XmlNode) -> DelegationSetPage {
    DelegationSetPage {
        delegation_sets: root
            .child("DelegationSets")
            .map(|list| list.children_named("DelegationSet").map(delegation_set).collect())
            .unwrap_or_default(),
        truncated: root.child_bool("IsTruncated").unwrap_or(false),
        next_marker: optional(root, "NextMarker"),
    }
}

/// `<GetReusableDelegationSetResponse>`
pub(crate) fn delegation_set_response(root: &XmlNode) -> Result<DelegationSet> {
    Ok(delegation_set(required_child(root, "DelegationSet")?))
}

// ============ Errors ============

/// Error documents: `<ErrorResponse><Error>` and the `<InvalidChangeBatch>` variant.
pub(crate) fn error_response(root: &XmlNode) -> Option<RawApiError> {
    match root.name() {
        "ErrorResponse" => {
            let error = root.child("Error")?;
            Some(RawApiError::with_code(
                error.child_text("Code")?,
                error.child_text("Message").unwrap_or_default(),
            ))
        }
        "InvalidChangeBatch" => {
            let messages: Vec<&str> = root
                .child("Messages")
                .map(|list| list.children_named("Message").map(XmlNode::text).collect())
                .unwrap_or_default();
            let message = if messages.is_empty() {
                root.child_text("Message").unwrap_or_default().to_string()
            } else {
                messages.join("; ")
            };
            Some(RawApiError::with_code("InvalidChangeBatch", message))
        }
        _ => None,
    }
}
