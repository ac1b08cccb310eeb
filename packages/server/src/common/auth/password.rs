use sha2::{Digest, Sha256};

/// Digest a password for storage in the users table.
///
/// Hashing strength is an explicit non-goal for this deployment; the digest
/// exists so credentials are never stored or compared in the clear.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = digest_password("hunter2");
        let b = digest_password("hunter2");
        assert_eq!(a, b, "Same password should produce same digest");

        let c = digest_password("hunter3");
        assert_ne!(a, c, "Different passwords should have different digests");
    }
}
