//! Tests for bucket_error types.

use bucket_error::*;

#[test]
fn test_query_error_records_location() {
    let err = QueryError::new(QueryErrorKind::Syntax("unexpected ')'".to_string()));
    assert_eq!(err.file, file!());
    assert!(err.line > 0);
    assert_eq!(err.message(), "unexpected ')'");
}

#[test]
fn test_query_error_display() {
    let err = QueryError::new(QueryErrorKind::InvalidBucket("exchange".to_string()));
    let text = err.to_string();
    assert!(text.starts_with("Query Error: Invalid bucket: exchange at line"));
}

#[test]
fn test_json_error_converts_to_malformed_result() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: QueryError = json_err.into();
    assert!(matches!(err.kind(), QueryErrorKind::MalformedResult(_)));
}

#[test]
fn test_toml_error_converts_to_config_error() {
    let toml_err = toml::from_str::<toml::Table>("page_sizes = [").unwrap_err();
    let err: ConfigError = toml_err.into();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_bucket_error_wraps_kinds() {
    let err: BucketError = ConfigError::new("bad").into();
    assert!(matches!(err.kind(), BucketErrorKind::Config(_)));
    assert!(err.to_string().starts_with("Bucket Error: Configuration Error: bad"));

    let result: BucketResult<()> = Err(QueryError::new(QueryErrorKind::Executor("down".into())).into());
    assert!(matches!(result.unwrap_err().kind(), BucketErrorKind::Query(_)));
}
