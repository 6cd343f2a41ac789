use thiserror::Error;

/// Errors emitted by the security transform pipeline.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The supplied symmetric key does not decode to 32 bytes of base64.
    #[error("encryption key is not valid base64 for a 32-byte key")]
    InvalidKey,
    /// AEAD encryption failed.
    #[error("field encryption failed")]
    Encryption,
    /// The token was not produced by the active key, or was corrupted.
    #[error("field decryption failed: token does not match the active key or is corrupted")]
    Decryption,
}
