//! Provider 公共工具函数

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;

use crate::error::{ProviderError, Result};

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(connect_timeout: Duration, request_timeout: Duration) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: crate::PROVIDER_NAME.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（`SigV4` 签名密钥派生）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

// ============ 资源 ID 处理 ============

/// Path-style prefixes the API puts in front of resource ids.
const RESOURCE_ID_PREFIXES: [&str; 3] = ["hostedzone/", "change/", "delegationset/"];

/// 去掉资源 ID 的路径前缀
/// 如: "/hostedzone/Z123" -> "Z123"
/// 如: "/change/C2682N5HXP0BZ4" -> "C2682N5HXP0BZ4"
pub fn normalize_resource_id(id: &str) -> &str {
    let trimmed = id.trim().trim_start_matches('/');
    RESOURCE_ID_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_prefixes() {
        assert_eq!(normalize_resource_id("/hostedzone/Z1D633PJN98FT9"), "Z1D633PJN98FT9");
        assert_eq!(normalize_resource_id("hostedzone/Z1D633PJN98FT9"), "Z1D633PJN98FT9");
        assert_eq!(normalize_resource_id("/change/C2682N5HXP0BZ4"), "C2682N5HXP0BZ4");
        assert_eq!(normalize_resource_id("/delegationset/N1PA6795"), "N1PA6795");
    }

    #[test]
    fn bare_ids_are_unchanged() {
        assert_eq!(normalize_resource_id("Z1D633PJN98FT9"), "Z1D633PJN98FT9");
        assert_eq!(normalize_resource_id(" Z1 "), "Z1");
    }

    #[test]
    fn hmac_matches_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
