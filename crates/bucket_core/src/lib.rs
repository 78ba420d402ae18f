//! Core data types for the Bucket page rendering library.
//!
//! This crate provides the schema, cell value, result and paging types that
//! the renderer consumes, plus the request types used to reach the bucket
//! query action and the shared rendering configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod paging;
mod request;
mod result;
mod schema;
mod value;

pub use config::{DEFAULT_PAGE_SIZES, PageConfig, PageConfigBuilder};
pub use paging::{PagingState, PagingStateBuilder, QueryParams};
pub use request::{
    ApiRequest, BUCKET_ACTION, BucketQuery, BucketQueryBuilder, RequestContext,
    RequestContextBuilder,
};
pub use result::{ResultRow, ResultSet};
pub use schema::{ColumnDescriptor, ColumnType, Schema};
pub use value::{CellValue, Scalar};
