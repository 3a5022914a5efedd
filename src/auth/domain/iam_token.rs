use crate::core::domain::error::ValidationError;
use chrono::{DateTime, Duration, Utc};

/// Share of the token lifetime after which a new token is requested.
const REFRESH_WINDOW_PERCENT: i32 = 20;
/// Upper bound applied to the server-supplied `expires_in`, in seconds.
const MAX_LIFETIME_SECS: i64 = 86_400;

/// An IAM access token and its validity window.
#[derive(Clone)]
pub(crate) struct IamToken {
    access_token: String,
    expires_at: DateTime<Utc>,
    refresh_at: DateTime<Utc>,
}

impl IamToken {
    /// Creates a token without validating the access token.
    ///
    /// `expiration` is the server's Unix timestamp; when it is unusable the
    /// lifetime is counted from `issued_at` instead. `expires_in` is clamped to
    /// `0..=MAX_LIFETIME_SECS`, and a lifetime that cannot be represented
    /// yields a token that is already expired.
    pub(crate) fn new_unchecked(
        access_token: String,
        expires_in: i64,
        expiration: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let lifetime = Duration::seconds(expires_in.clamp(0, MAX_LIFETIME_SECS));
        let expires_at = DateTime::from_timestamp(expiration, 0)
            .filter(|at| *at > issued_at)
            .unwrap_or_else(|| issued_at.checked_add_signed(lifetime).unwrap_or(issued_at));
        let refresh_at = expires_at
            .checked_sub_signed(lifetime * REFRESH_WINDOW_PERCENT / 100)
            .unwrap_or(expires_at);
        Self {
            access_token,
            expires_at,
            refresh_at,
        }
    }

    /// True once 80% of the lifetime has elapsed.
    #[must_use]
    pub(crate) fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now >= self.refresh_at
    }

    #[must_use]
    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    #[must_use]
    pub(crate) fn as_authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl std::fmt::Debug for IamToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamToken")
            .field("expires_at", &self.expires_at)
            .field("refresh_at", &self.refresh_at)
            .finish_non_exhaustive()
    }
}

/// Validates an access token received from the token endpoint.
pub(crate) fn validate_access_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(ValidationError::empty("access_token"));
    }
    Ok(())
}
