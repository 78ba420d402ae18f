//! Shared fixtures for bucket_page tests.

#![allow(dead_code)]

use bucket_core::ApiRequest;
use bucket_error::QueryError;
use bucket_interface::QueryExecutor;
use std::sync::Mutex;

/// Install a test subscriber so traced code paths are exercised.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Query executor that returns a canned response and records every request.
pub struct RecordingExecutor {
    response: Result<serde_json::Value, QueryError>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingExecutor {
    pub fn ok(response: serde_json::Value) -> Self {
        Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: QueryError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl QueryExecutor for RecordingExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<serde_json::Value, QueryError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}
