use serde::Deserialize;

/// Successful answer of the IAM token endpoint.
#[derive(Deserialize)]
pub(crate) struct IamTokenResponse {
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Unix timestamp at which the token expires.
    pub expiration: i64,
}
