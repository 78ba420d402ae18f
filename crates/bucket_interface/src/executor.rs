//! Query dispatch capability.

use bucket_core::ApiRequest;
use bucket_error::QueryError;

/// Executes internal API requests in the same process.
///
/// This is the only route to the query engine behind the `bucket` action.
/// Errors are the engine's own and are passed through untouched.
pub trait QueryExecutor: Send + Sync {
    /// Runs `request` and returns the structured result document.
    fn execute(&self, request: &ApiRequest) -> Result<serde_json::Value, QueryError>;
}
