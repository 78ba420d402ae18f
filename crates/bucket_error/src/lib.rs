//! Error types for the Bucket page rendering library.
//!
//! Every error records the source line and file where it was constructed.
//! Rendering itself never fails, so these types only surface from query
//! dispatch, result ingestion and configuration loading.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod query;

pub use config::ConfigError;
pub use query::{QueryError, QueryErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum BucketErrorKind {
    /// Query dispatch or result ingestion error
    Query(QueryError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for BucketErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketErrorKind::Query(e) => write!(f, "{}", e),
            BucketErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Bucket error with kind discrimination.
#[derive(Debug)]
pub struct BucketError(Box<BucketErrorKind>);

impl BucketError {
    /// Create a new error from a kind.
    pub fn new(kind: BucketErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BucketErrorKind {
        &self.0
    }
}

impl std::fmt::Display for BucketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bucket Error: {}", self.0)
    }
}

impl std::error::Error for BucketError {}

// Generic From implementation for any type that converts to BucketErrorKind
impl<T> From<T> for BucketError
where
    T: Into<BucketErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bucket operations.
pub type BucketResult<T> = std::result::Result<T, BucketError>;
