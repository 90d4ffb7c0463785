use sha2::{Digest, Sha256};

/// Derives a short filesystem-safe key from an arbitrary identifier.
/// User/session ids can contain anything; their store files cannot.
pub fn stable_key(id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_key_is_deterministic() {
        assert_eq!(stable_key("user-42"), stable_key("user-42"));
        assert_ne!(stable_key("user-42"), stable_key("user-43"));
    }

    #[test]
    fn test_stable_key_is_filesystem_safe() {
        let key = stable_key("../../etc/passwd");
        assert_eq!(key.len(), 16);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
