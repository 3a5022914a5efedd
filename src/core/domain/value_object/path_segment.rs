use crate::core::domain::error::ValidationError;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment: everything outside the
/// RFC 3986 unreserved set.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'!');

/// A non-empty, percent-encoded path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment(String);

impl PathSegment {
    /// Validates and encodes a path parameter.
    pub fn new(field: &str, raw: &str) -> Result<Self, ValidationError> {
        validate_path_segment(field, raw)?;
        Ok(Self(utf8_percent_encode(raw, PATH_SEGMENT_ENCODE_SET).to_string()))
    }

    /// Returns the encoded segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a path parameter.
///
/// Empty values and the dot segments `.` and `..` are rejected: URL parsing
/// collapses dot segments, which would address a different resource.
pub(crate) fn validate_path_segment(field: &str, raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::empty(field));
    }
    if raw == "." || raw == ".." {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: format!("{field} cannot be '{raw}'"),
        });
    }
    Ok(())
}
