//! Dispatch of bucket queries to the internal API.

use bucket_core::{ApiRequest, BucketQuery, RequestContext};
use bucket_error::QueryError;
use bucket_interface::QueryExecutor;
use tracing::{debug, error, instrument};

/// Runs a bucket query on behalf of an incoming request.
///
/// The select and where clauses are passed through untouched; the query
/// engine validates them. Its errors are returned unchanged.
pub fn run_query(
    executor: &dyn QueryExecutor,
    context: &RequestContext,
    bucket: &str,
    select: &str,
    where_clause: &str,
    limit: u64,
    offset: u64,
) -> Result<serde_json::Value, QueryError> {
    let query = BucketQuery::new(bucket, select, where_clause, limit, offset);
    run_bucket_query(executor, context, &query)
}

/// Runs a prepared bucket query on behalf of an incoming request.
#[instrument(
    skip(executor, context, query),
    fields(
        bucket = %query.bucket(),
        limit = query.limit(),
        offset = query.offset()
    )
)]
pub fn run_bucket_query(
    executor: &dyn QueryExecutor,
    context: &RequestContext,
    query: &BucketQuery,
) -> Result<serde_json::Value, QueryError> {
    let request = ApiRequest::derive(context, query.to_params());
    debug!("Dispatching bucket action");

    executor.execute(&request).inspect_err(|e| {
        error!(error = %e, "Bucket query failed");
    })
}
