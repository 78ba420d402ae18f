//! Query error types.

/// Query error conditions reported by the bucket action or by result ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum QueryErrorKind {
    /// The query engine failed while executing the request
    #[display("Query execution failed: {}", _0)]
    Executor(String),
    /// The requested bucket does not exist or has an invalid name
    #[display("Invalid bucket: {}", _0)]
    InvalidBucket(String),
    /// The select or where clause could not be parsed
    #[display("Syntax error: {}", _0)]
    Syntax(String),
    /// The structured result did not have the expected shape
    #[display("Malformed result: {}", _0)]
    MalformedResult(String),
}

/// Query error with location tracking.
///
/// # Examples
///
/// ```
/// use bucket_error::{QueryError, QueryErrorKind};
///
/// let err = QueryError::new(QueryErrorKind::InvalidBucket("no such bucket".to_string()));
/// assert!(format!("{}", err).contains("no such bucket"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Query Error: {} at line {} in {}", kind, line, file)]
pub struct QueryError {
    /// The kind of error that occurred
    pub kind: QueryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl QueryError {
    /// Create a new query error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: QueryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QueryErrorKind {
        &self.kind
    }

    /// The message carried by the error kind, without location details.
    ///
    /// This is what gets shown to readers of a rendered page.
    pub fn message(&self) -> &str {
        match &self.kind {
            QueryErrorKind::Executor(msg)
            | QueryErrorKind::InvalidBucket(msg)
            | QueryErrorKind::Syntax(msg)
            | QueryErrorKind::MalformedResult(msg) => msg,
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for QueryError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        QueryError::new(QueryErrorKind::MalformedResult(err.to_string()))
    }
}
