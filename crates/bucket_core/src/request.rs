//! Request types for dispatching to the internal API.

use crate::QueryParams;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Action identifier of the bucket query API.
pub const BUCKET_ACTION: &str = "bucket";

/// The incoming page request a query is made on behalf of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct RequestContext {
    /// Client address
    ip: Option<String>,
    /// Name of the user making the request
    user: Option<String>,
    /// Request headers
    headers: BTreeMap<String, String>,
    /// Query parameters of the incoming request
    params: QueryParams,
}

impl RequestContext {
    /// Create a new builder for a request context.
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }
}

/// An internal API request derived from an incoming request.
///
/// The caller's identity (address, user, headers) is inherited; the
/// parameters are replaced wholesale, never merged with the caller's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiRequest {
    /// Context inherited from the originating request
    context: RequestContext,
    /// Parameters of the derived request
    params: QueryParams,
}

impl ApiRequest {
    /// Derives a request from `base` carrying only `params`.
    pub fn derive(base: &RequestContext, params: QueryParams) -> Self {
        let context = RequestContext {
            params: QueryParams::new(),
            ..base.clone()
        };
        Self { context, params }
    }

    /// Value of a request parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The `action` parameter.
    pub fn action(&self) -> Option<&str> {
        self.param("action")
    }
}

/// Parameters of one bucket query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct BucketQuery {
    /// Name of the bucket to query
    bucket: String,
    /// Select clause, passed through unvalidated
    #[builder(default)]
    select: String,
    /// Where clause, passed through unvalidated
    #[builder(default)]
    #[serde(rename = "where")]
    where_clause: String,
    /// Maximum number of rows
    #[builder(default = "20")]
    limit: u64,
    /// Number of rows to skip
    #[builder(default)]
    offset: u64,
}

impl BucketQuery {
    /// Creates a query from its five parameters.
    pub fn new(
        bucket: impl Into<String>,
        select: impl Into<String>,
        where_clause: impl Into<String>,
        limit: u64,
        offset: u64,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            select: select.into(),
            where_clause: where_clause.into(),
            limit,
            offset,
        }
    }

    /// Create a new builder for a bucket query.
    pub fn builder() -> BucketQueryBuilder {
        BucketQueryBuilder::default()
    }

    /// Parameters of the `bucket` API action for this query.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("action", BUCKET_ACTION)
            .with("bucket", &self.bucket)
            .with("select", &self.select)
            .with("where", &self.where_clause)
            .with("limit", self.limit)
            .with("offset", self.offset)
    }
}
