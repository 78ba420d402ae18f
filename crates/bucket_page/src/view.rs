//! Query page composition.

use crate::{PageTitle, ResultFormatter, run_bucket_query};
use bucket_core::{
    BucketQuery, PageConfig, PagingState, QueryParams, RequestContext, ResultSet, Schema,
};
use bucket_error::{BucketResult, QueryError, QueryErrorKind};
use bucket_interface::QueryExecutor;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Key of the row array in a bucket action response.
const ROWS_KEY: &str = "bucket";
/// Key of the column schema in a bucket action response.
const SCHEMA_KEY: &str = "schema";
/// Key of the selected field names in a bucket action response.
const FIELDS_KEY: &str = "fields";
/// Key of an error message reported as data by the bucket action.
const ERROR_KEY: &str = "error";

/// Renders a full query page: pagination, result table, pagination.
pub struct BucketPageView {
    formatter: ResultFormatter,
    executor: Arc<dyn QueryExecutor>,
}

impl BucketPageView {
    /// Creates a view that queries through `executor`.
    pub fn new(formatter: ResultFormatter, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            formatter,
            executor,
        }
    }

    /// Creates a view with default capabilities, configured from a TOML file.
    #[instrument(skip(path, executor), fields(path = %path.as_ref().display()))]
    pub fn from_config_file(
        path: impl AsRef<Path>,
        executor: Arc<dyn QueryExecutor>,
    ) -> BucketResult<Self> {
        let config = PageConfig::from_file(path)?;
        info!(page_sizes = ?config.page_sizes(), "Configured query page view");
        Ok(Self::new(ResultFormatter::new(config), executor))
    }

    /// The formatter used for rendering.
    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Runs `query` and renders the result.
    ///
    /// Query failures are rendered as an error fragment instead of a table.
    /// `extra_query` is carried on every pagination link.
    #[instrument(
        skip(self, context, title, query, extra_query),
        fields(title = %title, bucket = %query.bucket())
    )]
    pub fn render(
        &self,
        context: &RequestContext,
        title: &PageTitle,
        query: &BucketQuery,
        extra_query: &QueryParams,
    ) -> String {
        let response = match run_bucket_query(self.executor.as_ref(), context, query) {
            Ok(response) => response,
            Err(e) => return self.formatter.print_error(e.message()),
        };

        if let Some(message) = response.get(ERROR_KEY).and_then(Value::as_str) {
            warn!(%message, "Bucket action reported an error");
            return self.formatter.print_error(message);
        }

        match self.render_response(&response, title, query, extra_query) {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "Could not read bucket response");
                self.formatter.print_error(e.message())
            }
        }
    }

    fn render_response(
        &self,
        response: &Value,
        title: &PageTitle,
        query: &BucketQuery,
        extra_query: &QueryParams,
    ) -> Result<String, QueryError> {
        let rows = response.get(ROWS_KEY).ok_or_else(|| {
            QueryError::new(QueryErrorKind::MalformedResult(format!(
                "response has no '{}' rows",
                ROWS_KEY
            )))
        })?;
        let result = ResultSet::from_json(rows)?;

        let schema = match response.get(SCHEMA_KEY) {
            Some(schema) => Schema::from_json(schema)?,
            None => Schema::new(),
        };
        let fields = response
            .get(FIELDS_KEY)
            .map(|fields| serde_json::from_value::<Vec<String>>(fields.clone()))
            .transpose()?;

        let limit = *query.limit();
        let has_next = limit > 0 && result.len() as u64 == limit;
        debug!(row_count = result.len(), has_next, "Rendering bucket response");

        let paging = PagingState::new(limit, *query.offset(), extra_query.clone(), has_next);
        let links = self.formatter.get_page_links(title, &paging).to_string();
        let table = self
            .formatter
            .get_result_table(&schema, fields.as_deref(), &result);

        Ok(format!("{}{}{}", links, table, links))
    }
}
