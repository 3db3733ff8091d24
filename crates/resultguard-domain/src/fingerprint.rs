use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an ignored-result finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - source path (repo-relative)
/// - qualified method name
/// - line and column of the highlighted range (if present)
pub fn fingerprint_for_call(
    check_id: &str,
    code: &str,
    path: &str,
    method: &str,
    line: Option<u32>,
    col: Option<u32>,
) -> String {
    let line = line.map(|l| l.to_string()).unwrap_or_default();
    let col = col.map(|c| c.to_string()).unwrap_or_default();
    let canonical = [check_id, code, path, method, line.as_str(), col.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_position_sensitive() {
        let a = fingerprint_for_call("c", "x", "A.java", "p.A.m", Some(1), Some(2));
        let b = fingerprint_for_call("c", "x", "A.java", "p.A.m", Some(1), Some(2));
        let c = fingerprint_for_call("c", "x", "A.java", "p.A.m", Some(3), Some(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
