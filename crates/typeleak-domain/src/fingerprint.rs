use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a module-level finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - module name
/// - subject (the private type name, or the failing function)
pub fn fingerprint_for_module(check_id: &str, code: &str, module: &str, subject: &str) -> String {
    let canonical = [check_id, code, module, subject].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
