//! AWS Signature Version 4

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;
use crate::types::{ApiRequest, Credentials};
use crate::utils::log_sanitizer::{redact_authorization, truncate_for_log};

use super::SigV4Executor;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Canonical query string: parameters sorted by name then value, RFC 3986 encoded.
///
/// The same string is used for the request URL so the signed and sent queries agree.
pub(crate) fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| {
            (
                urlencoding::encode(k).into_owned(),
                urlencoding::encode(v).into_owned(),
            )
        })
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonical URI: every path segment encoded, slashes kept.
fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")`
pub(crate) fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

impl SigV4Executor {
    /// Generate the `Authorization` header for `request`
    /// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
    ///
    /// Signs `host`, `x-amz-date`, `x-amz-security-token` (temporary credentials) and
    /// every extra header carried by the request.
    pub(crate) fn sign(request: &ApiRequest, credentials: &Credentials, amz_date: &str) -> String {
        let date = amz_date.get(..8).unwrap_or(amz_date);

        // 1. Canonical headers (lowercase names, trimmed values, sorted)
        let mut headers: Vec<(String, String)> = vec![
            ("host".to_string(), request.host.clone()),
            ("x-amz-date".to_string(), amz_date.to_string()),
        ];
        if let Some(token) = &credentials.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }
        headers.extend(
            request
                .headers
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.trim().to_string())),
        );
        headers.sort();

        let canonical_headers = headers.iter().fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });
        let signed_headers = headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        // 2. Payload hash
        let payload = request.body.as_deref().unwrap_or("");
        let hashed_payload = hex::encode(Sha256::digest(payload.as_bytes()));

        // 3. Canonical request
        let canonical_request = format!(
            "{}\n{}\n{}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}",
            request.method.as_str(),
            canonical_uri(&request.path),
            canonical_query_string(&request.query),
        );

        log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

        // 4. String to sign
        let scope = format!(
            "{date}/{}/{}/aws4_request",
            request.region, request.service
        );
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!("{ALGORITHM}\n{amz_date}\n{scope}\n{hashed_canonical_request}");

        log::debug!("StringToSign:\n{string_to_sign}");

        // 5. Signature
        let key = signing_key(
            &credentials.secret_access_key,
            date,
            &request.region,
            &request.service,
        );
        let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            credentials.access_key_id
        );
        log::debug!("Authorization: {}", redact_authorization(&authorization));
        authorization
    }
}
