//! Request authentication.
//!
//! An [`Authenticator`] adds credentials to the headers of every outgoing request.

use crate::core::domain::error::{ValidationError, VmwareResult};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

pub const AUTHTYPE_IAM: &str = "iam";
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearerToken";
pub const AUTHTYPE_BASIC: &str = "basic";
pub const AUTHTYPE_NOAUTH: &str = "noAuth";

/// Produces the credentials attached to each request.
///
/// Implementations are shared between clones of a client and may be called
/// from many tasks at once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// One of the `AUTHTYPE_*` constants.
    fn authentication_type(&self) -> &'static str;

    /// Checks the configuration without contacting any server.
    ///
    /// # Errors
    /// Returns a validation error for missing or malformed credentials.
    fn validate(&self) -> VmwareResult<()>;

    /// Adds credentials to `headers`.
    ///
    /// # Errors
    /// Returns an error when credentials cannot be obtained.
    async fn authenticate(&self, headers: &mut HeaderMap) -> VmwareResult<()>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    fn validate(&self) -> VmwareResult<()> {
        Ok(())
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> VmwareResult<()> {
        Ok(())
    }
}

/// Sends a caller-managed bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARER_TOKEN
    }

    fn validate(&self) -> VmwareResult<()> {
        if self.bearer_token.trim().is_empty() {
            return Err(ValidationError::empty("bearer_token").into());
        }
        Ok(())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> VmwareResult<()> {
        headers.insert(
            AUTHORIZATION,
            authorization_value(&format!("Bearer {}", self.bearer_token))?,
        );
        Ok(())
    }
}

/// Sends a username and password with HTTP basic authentication.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    fn validate(&self) -> VmwareResult<()> {
        validate_credential("username", &self.username)?;
        validate_credential("password", &self.password)?;
        Ok(())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> VmwareResult<()> {
        headers.insert(
            AUTHORIZATION,
            basic_authorization(&self.username, &self.password)?,
        );
        Ok(())
    }
}

/// Rejects empty credentials and credentials still wrapped in template or
/// quoting characters.
pub(crate) fn validate_credential(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    if value.contains(['{', '}', '"']) {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: format!("{field} cannot contain '{{', '}}' or '\"' characters"),
        });
    }
    Ok(())
}

pub(crate) fn basic_authorization(
    username: &str,
    password: &str,
) -> Result<HeaderValue, ValidationError> {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    authorization_value(&format!("Basic {encoded}"))
}

fn authorization_value(value: &str) -> Result<HeaderValue, ValidationError> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        ValidationError::Format("Credentials contain characters not allowed in a header".to_string())
    })?;
    header.set_sensitive(true);
    Ok(header)
}
