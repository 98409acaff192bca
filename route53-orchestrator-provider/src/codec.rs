//! Change batch codec
//!
//! Turns typed record sets into Route 53 `ChangeResourceRecordSetsRequest` XML. The
//! codec is pure: no I/O, no state, same input → same bytes.
//!
//! Only fields that are present on a [`ResourceRecordSet`] are emitted, always in the
//! canonical order of [`RECORD_SET_FIELDS`]. All text content is XML-escaped.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::error::{ProviderError, Result};
use crate::types::{
    AliasTarget, ChangeAction, ChangeBatch, CreateHostedZoneRequest, GeoLocation,
    ResourceRecordSet,
};

/// XML namespace of the `2013-04-01` API.
pub const ROUTE53_XML_NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Encoder for one optional child of `<ResourceRecordSet>`.
///
/// `encode` returns the escaped inner XML when the field is present.
struct FieldEncoder {
    element: &'static str,
    encode: fn(&ResourceRecordSet) -> Option<String>,
}

/// Canonical element order inside `<ResourceRecordSet>`.
const RECORD_SET_FIELDS: [FieldEncoder; 13] = [
    FieldEncoder {
        element: "AliasTarget",
        encode: encode_alias_target,
    },
    FieldEncoder {
        element: "Failover",
        encode: encode_failover,
    },
    FieldEncoder {
        element: "GeoLocation",
        encode: encode_geo_location,
    },
    FieldEncoder {
        element: "HealthCheckId",
        encode: encode_health_check_id,
    },
    FieldEncoder {
        element: "MultiValueAnswer",
        encode: encode_multi_value_answer,
    },
    FieldEncoder {
        element: "Name",
        encode: encode_name,
    },
    FieldEncoder {
        element: "Region",
        encode: encode_region,
    },
    FieldEncoder {
        element: "ResourceRecords",
        encode: encode_resource_records,
    },
    FieldEncoder {
        element: "SetIdentifier",
        encode: encode_set_identifier,
    },
    FieldEncoder {
        element: "TrafficPolicyInstanceId",
        encode: encode_traffic_policy_instance_id,
    },
    FieldEncoder {
        element: "TTL",
        encode: encode_ttl,
    },
    FieldEncoder {
        element: "Type",
        encode: encode_type,
    },
    FieldEncoder {
        element: "Weight",
        encode: encode_weight,
    },
];

fn encode_alias_target(record: &ResourceRecordSet) -> Option<String> {
    record.alias_target.as_ref().map(|AliasTarget {
        hosted_zone_id,
        dns_name,
        evaluate_target_health,
    }| {
        format!(
            "<HostedZoneId>{}</HostedZoneId><DNSName>{}</DNSName><EvaluateTargetHealth>{evaluate_target_health}</EvaluateTargetHealth>",
            escape(hosted_zone_id.as_str()),
            escape(dns_name.as_str()),
        )
    })
}

fn encode_failover(record: &ResourceRecordSet) -> Option<String> {
    record.failover.map(|f| f.as_str().to_string())
}

fn encode_geo_location(record: &ResourceRecordSet) -> Option<String> {
    record.geo_location.as_ref().map(|GeoLocation {
        continent_code,
        country_code,
        subdivision_code,
    }| {
        let mut inner = String::new();
        for (element, value) in [
            ("ContinentCode", continent_code),
            ("CountryCode", country_code),
            ("SubdivisionCode", subdivision_code),
        ] {
            if let Some(value) = value {
                let _ = write!(inner, "<{element}>{}</{element}>", escape(value.as_str()));
            }
        }
        inner
    })
}

fn encode_health_check_id(record: &ResourceRecordSet) -> Option<String> {
    record
        .health_check_id
        .as_deref()
        .map(|v| escape(v).into_owned())
}

fn encode_multi_value_answer(record: &ResourceRecordSet) -> Option<String> {
    record.multi_value_answer.map(|v| v.to_string())
}

fn encode_name(record: &ResourceRecordSet) -> Option<String> {
    record.name.as_deref().map(|v| escape(v).into_owned())
}

fn encode_region(record: &ResourceRecordSet) -> Option<String> {
    record.region.as_deref().map(|v| escape(v).into_owned())
}

fn encode_resource_records(record: &ResourceRecordSet) -> Option<String> {
    record.resource_records.as_ref().map(|records| {
        records
            .as_slice()
            .iter()
            .fold(String::new(), |mut acc, r| {
                let _ = write!(
                    acc,
                    "<ResourceRecord><Value>{}</Value></ResourceRecord>",
                    escape(r.value.as_str())
                );
                acc
            })
    })
}

fn encode_set_identifier(record: &ResourceRecordSet) -> Option<String> {
    record
        .set_identifier
        .as_deref()
        .map(|v| escape(v).into_owned())
}

fn encode_traffic_policy_instance_id(record: &ResourceRecordSet) -> Option<String> {
    record
        .traffic_policy_instance_id
        .as_deref()
        .map(|v| escape(v).into_owned())
}

fn encode_ttl(record: &ResourceRecordSet) -> Option<String> {
    record.ttl.map(|v| v.to_string())
}

fn encode_type(record: &ResourceRecordSet) -> Option<String> {
    record.record_type.map(|t| t.as_str().to_string())
}

fn encode_weight(record: &ResourceRecordSet) -> Option<String> {
    record.weight.map(|v| v.to_string())
}

fn validate_record(record: &ResourceRecordSet) -> Result<()> {
    if record.is_empty() {
        return Err(ProviderError::EmptyRecordSet {
            provider: crate::PROVIDER_NAME.to_string(),
        });
    }
    if record
        .resource_records
        .as_ref()
        .is_some_and(|records| records.is_empty())
    {
        return Err(ProviderError::InvalidParameter {
            provider: crate::PROVIDER_NAME.to_string(),
            param: "resource_records".to_string(),
            detail: "must contain at least one value when present".to_string(),
        });
    }
    Ok(())
}

/// Encode one `<Change>` element for an already-parsed action.
pub fn encode_change(record: &ResourceRecordSet, action: ChangeAction) -> Result<String> {
    validate_record(record)?;

    let mut xml = String::with_capacity(256);
    let _ = write!(xml, "<Change><Action>{}</Action><ResourceRecordSet>", action.as_str());
    for field in &RECORD_SET_FIELDS {
        if let Some(inner) = (field.encode)(record) {
            let _ = write!(xml, "<{0}>{inner}</{0}>", field.element);
        }
    }
    xml.push_str("</ResourceRecordSet></Change>");
    Ok(xml)
}

/// Encode one `<Change>` element.
///
/// `action` must be exactly `CREATE`, `UPSERT` or `DELETE`; the check is case-sensitive
/// and happens before the record is inspected.
pub fn build_change_item_xml(record: &ResourceRecordSet, action: &str) -> Result<String> {
    let action: ChangeAction = action.parse()?;
    encode_change(record, action)
}

/// Wrap change fragments into a complete `ChangeResourceRecordSetsRequest` document.
///
/// Fragments are concatenated in input order.
pub fn build_change_batch_envelope<S: AsRef<str>>(
    fragments: &[S],
    comment: Option<&str>,
) -> String {
    let mut xml = String::with_capacity(
        256 + fragments.iter().map(|f| f.as_ref().len()).sum::<usize>(),
    );
    xml.push_str(XML_DECLARATION);
    let _ = write!(
        xml,
        r#"<ChangeResourceRecordSetsRequest xmlns="{ROUTE53_XML_NAMESPACE}"><ChangeBatch>"#
    );
    if let Some(comment) = comment {
        let _ = write!(xml, "<Comment>{}</Comment>", escape(comment));
    }
    xml.push_str("<Changes>");
    for fragment in fragments {
        xml.push_str(fragment.as_ref());
    }
    xml.push_str("</Changes></ChangeBatch></ChangeResourceRecordSetsRequest>");
    xml
}

/// Encode a whole [`ChangeBatch`]. An empty batch is rejected.
pub fn encode_change_batch(batch: &ChangeBatch) -> Result<String> {
    if batch.is_empty() {
        return Err(ProviderError::InvalidParameter {
            provider: crate::PROVIDER_NAME.to_string(),
            param: "changes".to_string(),
            detail: "change batch must contain at least one change".to_string(),
        });
    }

    let fragments = batch
        .changes
        .iter()
        .map(|item| encode_change(&item.record, item.action))
        .collect::<Result<Vec<_>>>()?;
    Ok(build_change_batch_envelope(&fragments, batch.comment.as_deref()))
}

/// Encode a `CreateHostedZoneRequest` document.
pub fn build_create_hosted_zone_xml(
    req: &CreateHostedZoneRequest,
    caller_reference: &str,
) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(XML_DECLARATION);
    let _ = write!(
        xml,
        r#"<CreateHostedZoneRequest xmlns="{ROUTE53_XML_NAMESPACE}"><Name>{}</Name><CallerReference>{}</CallerReference>"#,
        escape(req.name.as_str()),
        escape(caller_reference),
    );
    if let Some(comment) = &req.comment {
        let _ = write!(
            xml,
            "<HostedZoneConfig><Comment>{}</Comment></HostedZoneConfig>",
            escape(comment.as_str())
        );
    }
    if let Some(id) = &req.delegation_set_id {
        let _ = write!(
            xml,
            "<DelegationSetId>{}</DelegationSetId>",
            escape(crate::providers::common::normalize_resource_id(id))
        );
    }
    xml.push_str("</CreateHostedZoneRequest>");
    xml
}
