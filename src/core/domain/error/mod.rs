use crate::core::domain::model::detailed_response::ResponseMetadata;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The main error type for VMware as a Service operations.
///
/// Every operation returns exactly one of these on failure. Variants that
/// stem from a received HTTP response keep the [`ResponseMetadata`] so the
/// caller can inspect the status, headers and raw body of opaque failures.
#[derive(Error, Debug)]
pub enum VmwareError {
    /// Missing or malformed options, detected before any request is sent
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// Network, TLS or body read failure
    ///
    /// # Fields
    /// * `0` - A description of the transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The call was aborted through its cancellation token
    #[error("Request cancelled")]
    Cancelled,

    /// The authenticator could not produce credentials for the request
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server answered with a non-2xx status
    #[error("{0}")]
    Api(Box<ApiError>),

    /// A 2xx body could not be decoded into the expected record
    ///
    /// # Fields
    /// * `message` - What failed while decoding
    /// * `metadata` - The response that was being decoded
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        metadata: Box<ResponseMetadata>,
    },
}

impl From<ValidationError> for VmwareError {
    fn from(error: ValidationError) -> Self {
        VmwareError::Validation { source: error }
    }
}

impl From<ApiError> for VmwareError {
    fn from(error: ApiError) -> Self {
        VmwareError::Api(Box::new(error))
    }
}

impl VmwareError {
    /// Returns the response metadata when the error came from a received response.
    #[must_use]
    pub fn metadata(&self) -> Option<&ResponseMetadata> {
        match self {
            VmwareError::Api(api) => Some(&api.metadata),
            VmwareError::Decode { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    /// Returns the HTTP status code when the error came from a received response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.metadata().map(ResponseMetadata::status_code)
    }

    /// Returns `true` for the transport and protocol failures a retry may cure.
    ///
    /// Validation, decode, authentication and cancellation errors are never retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            VmwareError::Transport(_) => true,
            VmwareError::Api(api) => is_retryable_status(api.status_code),
            _ => false,
        }
    }
}

/// 429 and every 5xx except 501 Not Implemented.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status) && status != 501
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Shorthand for a required field that was not provided.
    pub(crate) fn missing(field: &str) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: format!("{field} is required"),
        }
    }

    /// Shorthand for a field that was provided but left empty.
    pub(crate) fn empty(field: &str) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: format!("{field} cannot be empty"),
        }
    }
}

/// One entry of the `errors` array in the service error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorItem {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
}

/// A structured non-2xx response.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Final HTTP status code.
    pub status_code: u16,
    /// Error code of the first reported error, if any.
    pub code: Option<String>,
    /// Human readable message; falls back to the status reason phrase.
    pub message: String,
    /// Documentation link of the first reported error, if any.
    pub more_info: Option<String>,
    /// Server trace identifier, if any.
    pub trace: Option<String>,
    /// Every error entry reported by the server.
    pub errors: Vec<ApiErrorItem>,
    /// The raw response.
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
    #[serde(default)]
    trace: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response, decoding the error envelope
    /// when the body carries one and synthesizing a message otherwise.
    pub fn from_metadata(metadata: ResponseMetadata) -> Self {
        let status_code = metadata.status_code();
        let envelope: ErrorEnvelope = serde_json::from_slice(metadata.body()).unwrap_or_default();

        let first = envelope.errors.first();
        let message = first
            .and_then(|e| e.message.clone())
            .or_else(|| match &envelope.error {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                _ => None,
            })
            .or_else(|| envelope.message.clone())
            .or_else(|| envelope.error_message.clone())
            .unwrap_or_else(|| reason_phrase(status_code));

        let code = first.and_then(|e| e.code.clone()).or_else(|| {
            envelope.code.as_ref().map(|c| match c {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        });

        Self {
            status_code,
            code,
            message,
            more_info: first.and_then(|e| e.more_info.clone()),
            trace: envelope.trace,
            errors: envelope.errors,
            metadata,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error ({}): {}", self.status_code, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        Ok(())
    }
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
        .to_string()
}

/// Type alias for Results that may fail with a VmwareError
pub type VmwareResult<T> = Result<T, VmwareError>;
