//! Security transform pipeline for ludogen.
//!
//! Pure functions (plus one keyed cipher) that turn plaintext PII and
//! credentials into their storage-safe forms: reversible field encryption,
//! salted password hashing, deterministic lookup digests, display masking,
//! and noise injection for usage metrics. Nothing in this crate performs I/O.

pub mod cipher;
pub mod digest;
pub mod error;
pub mod mask;
pub mod noise;
pub mod password;
pub mod token;

pub use cipher::FieldCipher;
pub use digest::hash_identifier;
pub use error::CryptoError;
pub use mask::mask_email;
pub use noise::inject_noise;
pub use password::{PasswordRecord, hash_password, verify_password};
pub use token::audit_token;
