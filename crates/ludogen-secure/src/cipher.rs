use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chacha20poly1305::aead::{Aead, OsRng};
use chacha20poly1305::{AeadCore, Key, KeyInit, XChaCha20Poly1305, XNonce};

use crate::error::CryptoError;

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 24;

/// Reversible field-level encryption, keyed once per process.
///
/// Tokens are `base64(nonce || ciphertext)` under XChaCha20-Poly1305 with a
/// fresh random nonce per call, so identical plaintexts never produce
/// identical tokens. The empty string round-trips as the empty token.
pub struct FieldCipher {
    aead: XChaCha20Poly1305,
}

impl FieldCipher {
    /// Build a cipher from a base64-encoded 32-byte key.
    pub fn from_base64_key(key_b64: &str) -> Result<Self, CryptoError> {
        let raw = BASE64
            .decode(key_b64.trim())
            .map_err(|_| CryptoError::InvalidKey)?;
        let key: [u8; KEY_LEN] = raw.try_into().map_err(|_| CryptoError::InvalidKey)?;
        Ok(Self {
            aead: XChaCha20Poly1305::new(Key::from_slice(&key)),
        })
    }

    /// Generate a fresh random key, base64-encoded for the environment.
    pub fn generate_key_base64() -> String {
        let key = XChaCha20Poly1305::generate_key(&mut OsRng);
        BASE64.encode(key)
    }

    /// Encrypt a field value into a storage token.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .aead
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::Encryption)?;
        let mut token = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        token.extend_from_slice(nonce.as_slice());
        token.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(token))
    }

    /// Decrypt a token produced by [`encrypt`](Self::encrypt).
    ///
    /// A token minted under a different key, truncated, or tampered with is a
    /// hard [`CryptoError::Decryption`], never a silent empty result.
    pub fn decrypt(&self, token: &str) -> Result<String, CryptoError> {
        if token.is_empty() {
            return Ok(String::new());
        }
        let raw = BASE64.decode(token).map_err(|_| CryptoError::Decryption)?;
        if raw.len() <= NONCE_LEN {
            return Err(CryptoError::Decryption);
        }
        let (nonce, ciphertext) = raw.split_at(NONCE_LEN);
        let plaintext = self
            .aead
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Decryption)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::Decryption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cipher() -> FieldCipher {
        FieldCipher::from_base64_key(&FieldCipher::generate_key_base64()).expect("build cipher")
    }

    #[test]
    fn round_trips_plaintext() {
        let cipher = cipher();
        let token = cipher.encrypt("ada.lovelace").expect("encrypt");
        assert_eq!(cipher.decrypt(&token).expect("decrypt"), "ada.lovelace");
    }

    #[test]
    fn empty_plaintext_maps_to_empty_sentinel() {
        let cipher = cipher();
        assert_eq!(cipher.encrypt("").expect("encrypt"), "");
        assert_eq!(cipher.decrypt("").expect("decrypt"), "");
    }

    #[test]
    fn repeated_encryption_yields_distinct_tokens() {
        let cipher = cipher();
        let a = cipher.encrypt("common-first-name").expect("encrypt a");
        let b = cipher.encrypt("common-first-name").expect("encrypt b");
        assert_ne!(a, b, "nonce must prevent pattern leakage");
        assert_eq!(cipher.decrypt(&a).expect("decrypt a"), "common-first-name");
        assert_eq!(cipher.decrypt(&b).expect("decrypt b"), "common-first-name");
    }

    #[test]
    fn wrong_key_is_a_hard_failure() {
        let token = cipher().encrypt("secret@example.com").expect("encrypt");
        let other = cipher();
        assert!(matches!(
            other.decrypt(&token),
            Err(CryptoError::Decryption)
        ));
    }

    #[test]
    fn corrupted_token_is_a_hard_failure() {
        let cipher = cipher();
        let token = cipher.encrypt("secret").expect("encrypt");
        let mut raw = BASE64.decode(&token).expect("decode token");
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = BASE64.encode(raw);
        assert!(matches!(
            cipher.decrypt(&tampered),
            Err(CryptoError::Decryption)
        ));
        assert!(matches!(
            cipher.decrypt("not-base64!!"),
            Err(CryptoError::Decryption)
        ));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            FieldCipher::from_base64_key("too-short"),
            Err(CryptoError::InvalidKey)
        ));
    }
}
