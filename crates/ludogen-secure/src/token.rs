use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::aead::rand_core::RngCore;

const TOKEN_LEN: usize = 16;

/// URL-safe audit token carried by each generated user.
///
/// 16 bytes from the OS CSPRNG. Uniqueness is probabilistic, not enforced;
/// the consuming backend never indexes these uniquely.
pub fn audit_token() -> String {
    let mut raw = [0u8; TOKEN_LEN];
    OsRng.fill_bytes(&mut raw);
    URL_SAFE_NO_PAD.encode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let a = audit_token();
        let b = audit_token();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
