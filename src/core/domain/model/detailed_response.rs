//! Response envelope returned by every operation.

use reqwest::header::HeaderMap;

/// Status, headers and raw body of a received response.
///
/// Kept on both successful results and errors so that callers can diagnose
/// opaque server behaviour.
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    status_code: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseMetadata {
    pub fn new(status_code: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Final HTTP status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response headers, including correlation headers echoed by the server.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Looks up a single header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A decoded result together with the response it came from.
///
/// `result` is `None` when the server answered 2xx with an empty body.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    metadata: ResponseMetadata,
    result: Option<T>,
}

impl<T> DetailedResponse<T> {
    pub fn new(metadata: ResponseMetadata, result: Option<T>) -> Self {
        Self { metadata, result }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.metadata.status_code()
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.metadata.headers()
    }

    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        self.metadata.body()
    }

    #[must_use]
    pub fn metadata(&self) -> &ResponseMetadata {
        &self.metadata
    }

    /// The decoded record, if the response carried a body.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }

    pub fn into_parts(self) -> (ResponseMetadata, Option<T>) {
        (self.metadata, self.result)
    }
}
