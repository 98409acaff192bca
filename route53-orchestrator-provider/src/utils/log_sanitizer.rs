//! Log sanitization utilities
//!
//! Keeps record values, signing keys and signatures out of debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Characters of a secret kept visible in log output.
const VISIBLE_SECRET_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes with a suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping a short prefix for correlation (`AKIA***`).
pub fn redact_secret(secret: &str) -> String {
    let visible = floor_char_boundary(secret, VISIBLE_SECRET_PREFIX);
    if secret.len() <= VISIBLE_SECRET_PREFIX {
        "***".to_string()
    } else {
        format!("{}***", &secret[..visible])
    }
}

/// Mask the `Signature=` part of a `SigV4` `Authorization` header.
pub fn redact_authorization(header: &str) -> String {
    match header.find("Signature=") {
        Some(pos) => format!("{}Signature=***", &header[..pos]),
        None => header.to_string(),
    }
}
