use crate::{
    auth::{
        application::{
            request::iam_token_request::IamTokenRequest,
            response::iam_token_response::IamTokenResponse,
        },
        domain::{
            authenticator::basic_authorization,
            iam_token::{IamToken, validate_access_token},
        },
    },
    core::domain::{
        error::{ApiError, VmwareError, VmwareResult},
        model::ResponseMetadata,
    },
};
use chrono::Utc;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tokio::sync::OnceCell;
use tracing::debug;

const TOKEN_PATH: &str = "/identity/token";

/// Where and how to ask for a token.
#[derive(Clone)]
pub(crate) struct IamTokenSettings {
    pub url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub disable_ssl_verification: bool,
}

/// Exchanges an API key for an access token.
///
/// The HTTP client is built on first use and kept for later refreshes, one
/// per TLS verification mode.
#[derive(Clone)]
pub(crate) struct IamTokenService {
    default_headers: HeaderMap,
    verified_client: OnceCell<Client>,
    unverified_client: OnceCell<Client>,
}

impl IamTokenService {
    pub(crate) fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            default_headers,
            verified_client: OnceCell::new(),
            unverified_client: OnceCell::new(),
        }
    }

    async fn http_client(&self, disable_ssl_verification: bool) -> VmwareResult<&Client> {
        let cell = if disable_ssl_verification {
            &self.unverified_client
        } else {
            &self.verified_client
        };
        cell.get_or_try_init(|| async move {
            Client::builder()
                .danger_accept_invalid_certs(disable_ssl_verification)
                .build()
                .map_err(|e| VmwareError::Transport(e.to_string()))
        })
        .await
    }

    pub(crate) async fn execute(
        &self,
        settings: &IamTokenSettings,
        request: &IamTokenRequest,
    ) -> VmwareResult<IamToken> {
        let http_client = self.http_client(settings.disable_ssl_verification).await?;
        let url = self.build_token_url(settings);
        let headers = self.build_headers(settings)?;

        debug!("Requesting IAM access token from {}", url);
        let response = http_client
            .post(&url)
            .headers(headers)
            .body(request.to_form())
            .send()
            .await
            .map_err(|e| VmwareError::Transport(format!("IAM token request failed: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| VmwareError::Transport(format!("Failed to read IAM response: {e}")))?;

        if !status.is_success() {
            let metadata = ResponseMetadata::new(status.as_u16(), HeaderMap::new(), body.to_vec());
            let error = ApiError::from_metadata(metadata);
            return Err(VmwareError::Authentication(format!(
                "IAM token request failed ({}): {}",
                error.status_code, error.message
            )));
        }

        self.handle_successful_response(&body)
    }

    fn build_token_url(&self, settings: &IamTokenSettings) -> String {
        let base = settings.url.trim_end_matches('/');
        if base.ends_with(TOKEN_PATH) {
            base.to_string()
        } else {
            format!("{base}{TOKEN_PATH}")
        }
    }

    fn build_headers(&self, settings: &IamTokenSettings) -> VmwareResult<HeaderMap> {
        let mut headers = self.default_headers.clone();
        if let (Some(id), Some(secret)) = (&settings.client_id, &settings.client_secret) {
            headers.insert(AUTHORIZATION, basic_authorization(id, secret)?);
        }
        Ok(headers)
    }

    fn handle_successful_response(&self, body: &[u8]) -> VmwareResult<IamToken> {
        let response: IamTokenResponse = serde_json::from_slice(body).map_err(|e| {
            VmwareError::Authentication(format!("Failed to parse IAM token response: {e}"))
        })?;
        validate_access_token(&response.access_token)?;

        debug!("Received IAM access token valid for {}s", response.expires_in);
        Ok(IamToken::new_unchecked(
            response.access_token,
            response.expires_in,
            response.expiration,
            Utc::now(),
        ))
    }
}

impl Default for IamTokenService {
    fn default() -> Self {
        Self::new()
    }
}
