use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The run configuration failed validation.
    #[error(transparent)]
    Config(#[from] ludogen_core::Error),
    /// A security transform failed (key problems surface here).
    #[error("crypto failure: {0}")]
    Crypto(#[from] ludogen_secure::CryptoError),
    /// A generator asked a pool for more distinct identifiers than exist.
    /// Callers clamp before sampling, so hitting this is a sequencing bug:
    /// some entity kind was generated before its dependencies.
    #[error("pool '{kind}' holds {available} identifiers, cannot draw {requested} distinct")]
    PoolExhausted {
        kind: &'static str,
        requested: usize,
        available: usize,
    },
}
