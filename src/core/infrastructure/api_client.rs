//! Internal HTTP client that authenticates, sends and retries requests.

use crate::{
    auth::domain::authenticator::Authenticator,
    core::{
        domain::{
            error::{VmwareError, VmwareResult, is_retryable_status},
            model::{DetailedResponse, ResponseMetadata},
            value_object::ServiceUrl,
        },
        infrastructure::{
            request_builder::{OperationRequest, PreparedRequest},
            response_decoder::{decode, read_metadata},
            retry::RetryPolicy,
        },
    },
};
use reqwest::{Client, header::HeaderMap};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Internal HTTP client shared by every operation.
///
/// Each call resolves its request once, then authenticates and sends it,
/// retrying transient failures when a [`RetryPolicy`] is set. Retry state
/// lives on the stack of the call, so concurrent calls never share it.
#[derive(Clone)]
pub(crate) struct ApiClient {
    http_client: Client,
    service_url: ServiceUrl,
    authenticator: Arc<dyn Authenticator>,
    default_headers: HeaderMap,
    enable_gzip: bool,
    retry_policy: Option<RetryPolicy>,
}

impl ApiClient {
    pub(crate) fn new(
        http_client: Client,
        service_url: ServiceUrl,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            http_client,
            service_url,
            authenticator,
            default_headers: HeaderMap::new(),
            enable_gzip: false,
            retry_policy: None,
        }
    }

    pub(crate) fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    pub(crate) fn set_service_url(&mut self, service_url: ServiceUrl) {
        self.service_url = service_url;
    }

    pub(crate) fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub(crate) fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub(crate) fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub(crate) fn enable_gzip(&self) -> bool {
        self.enable_gzip
    }

    pub(crate) fn set_enable_gzip(&mut self, enable: bool) {
        self.enable_gzip = enable;
    }

    pub(crate) fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    pub(crate) fn set_retry_policy(&mut self, policy: Option<RetryPolicy>) {
        self.retry_policy = policy;
    }

    /// Sends an operation and decodes its response.
    ///
    /// # Errors
    /// Returns `VmwareError::Cancelled` as soon as `cancel` fires, including
    /// before anything is sent. Other variants as documented on [`VmwareError`].
    pub(crate) async fn execute<T>(
        &self,
        request: OperationRequest<'_>,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<T>>
    where
        T: DeserializeOwned,
    {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(VmwareError::Cancelled);
        }

        let prepared = request.prepare(&self.service_url, &self.default_headers, self.enable_gzip)?;

        let metadata = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        debug!("{} cancelled", prepared.operation_id);
                        return Err(VmwareError::Cancelled);
                    }
                    result = self.send_with_retry(&prepared) => result?,
                }
            }
            None => self.send_with_retry(&prepared).await?,
        };

        decode(metadata)
    }

    async fn send_with_retry(&self, prepared: &PreparedRequest) -> VmwareResult<ResponseMetadata> {
        let policy = self
            .retry_policy
            .as_ref()
            .filter(|policy| policy.allows_method(&prepared.method));
        let mut attempt = 0u32;

        loop {
            let result = self.send_once(prepared, attempt).await;

            let Some(policy) = policy.filter(|policy| attempt < policy.max_retries) else {
                return result;
            };
            let wait = match &result {
                Ok(metadata) if is_retryable_status(metadata.status_code()) => {
                    let wait = policy.delay_for(attempt, Some(metadata.headers()));
                    warn!(
                        "{} returned {}, retrying in {}ms (attempt {})",
                        prepared.operation_id,
                        metadata.status_code(),
                        wait.as_millis(),
                        attempt + 1
                    );
                    wait
                }
                Err(VmwareError::Transport(e)) => {
                    let wait = policy.delay_for(attempt, None);
                    warn!(
                        "{} failed: {}, retrying in {}ms (attempt {})",
                        prepared.operation_id,
                        e,
                        wait.as_millis(),
                        attempt + 1
                    );
                    wait
                }
                _ => return result,
            };

            tokio::time::sleep(wait).await;
            attempt += 1;
        }
    }

    async fn send_once(
        &self,
        prepared: &PreparedRequest,
        attempt: u32,
    ) -> VmwareResult<ResponseMetadata> {
        let mut headers = prepared.headers.clone();
        self.authenticator.authenticate(&mut headers).await?;

        let mut request = self
            .http_client
            .request(prepared.method.clone(), prepared.url.clone())
            .headers(headers);
        if let Some(body) = &prepared.body {
            request = request.body(body.clone());
        }

        debug!(
            "{} {} {} (attempt {})",
            prepared.operation_id, prepared.method, prepared.url, attempt
        );
        let response = request
            .send()
            .await
            .map_err(|e| VmwareError::Transport(format!("HTTP request failed: {e}")))?;

        let metadata = read_metadata(response).await?;
        debug!(
            "{} received status {}",
            prepared.operation_id,
            metadata.status_code()
        );
        Ok(metadata)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("service_url", &self.service_url)
            .field(
                "authentication_type",
                &self.authenticator.authentication_type(),
            )
            .field("enable_gzip", &self.enable_gzip)
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}
