//! Tests for the capability traits' provided behavior.

use bucket_core::{ApiRequest, QueryParams, RequestContext};
use bucket_error::{QueryError, QueryErrorKind};
use bucket_interface::{MessageResolver, QueryExecutor, TextEscaper};
use serde_json::json;

struct EchoMessages;

impl MessageResolver for EchoMessages {
    fn message(&self, key: &str, params: &[&str]) -> String {
        format!("{}({})", key, params.join(","))
    }
}

struct RejectingExecutor;

impl QueryExecutor for RejectingExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<serde_json::Value, QueryError> {
        match request.param("bucket") {
            Some("known") => Ok(json!({"bucket": []})),
            other => Err(QueryError::new(QueryErrorKind::InvalidBucket(
                other.unwrap_or_default().to_string(),
            ))),
        }
    }
}

#[test]
fn test_closure_is_an_escaper() {
    let escaper = |text: &str| text.replace('<', "&lt;");
    assert_eq!(escaper.escape("<b>"), "&lt;b>");
}

#[test]
fn test_plain_message_has_no_params() {
    assert_eq!(EchoMessages.plain("bucket-next"), "bucket-next()");
    assert_eq!(EchoMessages.message("bucket-next-results", &["20"]), "bucket-next-results(20)");
}

#[test]
fn test_executor_as_trait_object() {
    let executor: &dyn QueryExecutor = &RejectingExecutor;
    let context = RequestContext::default();

    let ok = ApiRequest::derive(&context, QueryParams::new().with("bucket", "known"));
    assert!(executor.execute(&ok).is_ok());

    let bad = ApiRequest::derive(&context, QueryParams::new().with("bucket", "nope"));
    let err = executor.execute(&bad).unwrap_err();
    assert_eq!(err.kind(), &QueryErrorKind::InvalidBucket("nope".to_string()));
}
