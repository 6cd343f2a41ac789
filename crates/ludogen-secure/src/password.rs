use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::aead::rand_core::RngCore;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

const SALT_LEN: usize = 16;
const DERIVED_KEY_LEN: usize = 32;

/// Storage form of a password: base64 salt and derived key, plus the
/// iteration count needed to re-derive it at verification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    pub salt: String,
    pub hash: String,
    pub iterations: u32,
}

/// Derive a storage-safe password record with PBKDF2-HMAC-SHA256 and a
/// fresh random 16-byte salt.
pub fn hash_password(plaintext: &str, iterations: u32) -> PasswordRecord {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut derived = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), &salt, iterations, &mut derived);
    PasswordRecord {
        salt: BASE64.encode(salt),
        hash: BASE64.encode(derived),
        iterations,
    }
}

/// Recompute the derived key with the stored salt and compare in constant
/// time. Returns false on any mismatch, including an unparseable record;
/// verification never errors.
pub fn verify_password(plaintext: &str, record: &PasswordRecord) -> bool {
    let Ok(salt) = BASE64.decode(&record.salt) else {
        return false;
    };
    let Ok(stored) = BASE64.decode(&record.hash) else {
        return false;
    };
    if stored.len() != DERIVED_KEY_LEN {
        return false;
    }
    let mut derived = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), &salt, record.iterations, &mut derived);
    derived[..].ct_eq(&stored[..]).into()
}
