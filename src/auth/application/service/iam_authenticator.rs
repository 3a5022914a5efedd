use crate::{
    auth::{
        application::{
            request::iam_token_request::IamTokenRequest,
            service::iam_token_service::{IamTokenService, IamTokenSettings},
        },
        domain::{
            authenticator::{AUTHTYPE_IAM, Authenticator, validate_credential},
            iam_token::IamToken,
        },
    },
    core::domain::{
        error::{ValidationError, VmwareResult},
        value_object::validate_service_url,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Default IAM endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Authenticates with an IAM access token obtained from an API key.
///
/// The token is cached and renewed once 80% of its lifetime has passed.
/// Clones share the cache, and concurrent callers wait on a single renewal.
///
/// # Examples
///
/// ```no_run
/// use vmware_aas::{IamAuthenticator, VmwareClient, VmwareResult};
///
/// fn client() -> VmwareResult<VmwareClient> {
///     VmwareClient::builder()
///         .authenticator(IamAuthenticator::new("my-api-key"))
///         .build()
/// }
/// ```
#[derive(Clone)]
pub struct IamAuthenticator {
    apikey: String,
    scope: Option<String>,
    settings: IamTokenSettings,
    token_service: IamTokenService,
    token: Arc<Mutex<Option<IamToken>>>,
}

impl IamAuthenticator {
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            scope: None,
            settings: IamTokenSettings {
                url: DEFAULT_IAM_URL.to_string(),
                client_id: None,
                client_secret: None,
                disable_ssl_verification: false,
            },
            token_service: IamTokenService::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Overrides the IAM endpoint.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.settings.url = url.into();
        self
    }

    /// Sends the given client credentials as basic authentication to IAM.
    #[must_use]
    pub fn with_client_id_and_secret(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.settings.client_id = Some(client_id.into());
        self.settings.client_secret = Some(client_secret.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Skips TLS verification towards the IAM endpoint.
    #[must_use]
    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.settings.disable_ssl_verification = disable;
        self
    }

    async fn authorization(&self) -> VmwareResult<String> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();
        if let Some(token) = cached.as_ref().filter(|t| !t.needs_refresh(now)) {
            return Ok(token.as_authorization_header());
        }

        if cached.as_ref().is_some_and(|t| !t.is_expired(now)) {
            debug!("IAM access token nearing expiry, refreshing");
        } else {
            debug!("Acquiring IAM access token");
        }
        let request = IamTokenRequest::new(self.apikey.clone(), self.scope.clone());
        let token = self.token_service.execute(&self.settings, &request).await?;
        let header = token.as_authorization_header();
        *cached = Some(token);
        Ok(header)
    }
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.settings.url)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_IAM
    }

    fn validate(&self) -> VmwareResult<()> {
        validate_credential("apikey", &self.apikey)?;
        validate_service_url(&self.settings.url)?;
        match (&self.settings.client_id, &self.settings.client_secret) {
            (Some(_), Some(_)) | (None, None) => Ok(()),
            _ => Err(ValidationError::ConstraintViolation(
                "client_id and client_secret must be provided together".to_string(),
            )
            .into()),
        }
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> VmwareResult<()> {
        let authorization = self.authorization().await?;
        let mut value = HeaderValue::from_str(&authorization).map_err(|_| {
            ValidationError::Format("IAM access token is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}
