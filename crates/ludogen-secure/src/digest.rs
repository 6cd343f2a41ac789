use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest, Sha256};

/// Deterministic one-way digest for equality lookups on a sensitive field
/// without decryption (e.g. username lookup). SHA-256, base64-encoded.
pub fn hash_identifier(plaintext: &str) -> String {
    let digest = Sha256::digest(plaintext.as_bytes());
    BASE64.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(hash_identifier("pixel_paladin"), hash_identifier("pixel_paladin"));
    }

    #[test]
    fn distinct_inputs_differ() {
        assert_ne!(hash_identifier("pixel_paladin"), hash_identifier("pixel_paladim"));
    }

    #[test]
    fn matches_known_sha256_vector() {
        // SHA-256("") = e3b0c442..., base64 of that digest.
        assert_eq!(
            hash_identifier(""),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }
}
