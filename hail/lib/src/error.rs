/// Error types for the Hail library.
///
/// Greeting generation has exactly one way to fail: being asked to greet
/// nobody. Everything else (format choice, substitution) is infallible.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HailError {
    /// The caller supplied an empty name.
    #[error("empty name")]
    EmptyName,
}

/// Convenience Result type for Hail operations.
pub type Result<T> = std::result::Result<T, HailError>;
