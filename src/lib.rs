//! Async client for the IBM Cloud VMware as a Service API.
//!
//! The client manages director sites, their provider virtual data centers
//! (PVDCs) and clusters, and tenant virtual data centers (VDCs).
//!
//! Every operation takes one options record and returns a
//! [`DetailedResponse`] carrying the decoded result together with the status,
//! headers and raw body of the response. Each operation also has a
//! `_with_cancellation` form taking a [`CancellationToken`].

mod auth;
mod core;
mod resources;


pub use crate::auth::{
    application::service::{
        authenticator_factory::authenticator_from_environment,
        iam_authenticator::{DEFAULT_IAM_URL, IamAuthenticator},
    },
    domain::authenticator::{
        AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_IAM, AUTHTYPE_NOAUTH, Authenticator,
        BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
    },
};
pub use crate::core::domain::error::{
    ApiError, ApiErrorItem, ValidationError, VmwareError, VmwareResult,
};
pub use crate::core::domain::model::{
    Cluster, ClusterCollection, ClusterPatch, ClusterPrototype, ClusterSummary, DataCenterInfo,
    DetailedResponse, DirectorSite, DirectorSiteCollection, DirectorSiteHostProfile,
    DirectorSiteHostProfileCollection, DirectorSitePrototype, DirectorSitePvdc,
    DirectorSiteReference, DirectorSiteRegion, DirectorSiteRegionCollection, Edge, FileShares,
    MAX_HOST_COUNT, MIN_HOST_COUNT, MultitenantDirectorSite, MultitenantDirectorSiteCollection,
    MultitenantPvdc, PatchField, PatchMap, Pvdc, PvdcCollection, PvdcPrototype, PvdcProviderType,
    ResourceGroupIdentity, ResourceGroupReference, ResponseMetadata, Service, ServiceIdentity,
    StatusReason, UpdateCluster, Vdc, VdcCollection, VdcDirectorSite, VdcDirectorSitePrototype,
    VdcEdgePrototype, VdcPatch, VdcPrototype, VdcProviderType, VdcPvdc,
};
pub use crate::core::domain::options::{
    CallHeaders, CreateDirectorSitesOptions, CreateDirectorSitesPvdcsClustersOptions,
    CreateDirectorSitesPvdcsOptions, CreateVdcOptions, DeleteDirectorSiteOptions,
    DeleteDirectorSitesPvdcsClusterOptions, DeleteVdcOptions, GetDirectorInstancesPvdcsClusterOptions,
    GetDirectorSiteOptions, GetDirectorSitesPvdcsOptions, GetVdcOptions,
    ListDirectorSiteHostProfilesOptions, ListDirectorSiteRegionsOptions,
    ListDirectorSitesOptions, ListDirectorSitesPvdcsClustersOptions, ListDirectorSitesPvdcsOptions,
    ListMultitenantDirectorSitesOptions, ListVdcsOptions, OperationOptions,
    UpdateDirectorSitesPvdcsClusterOptions, UpdateVdcOptions,
};
pub use crate::core::domain::value_object::{
    DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, PARAMETERIZED_SERVICE_URL, construct_service_url,
    region_service_url,
};
pub use crate::core::infrastructure::{config::ServiceProperties, retry::RetryPolicy};
pub use tokio_util::sync::CancellationToken;

use crate::{
    auth::application::service::authenticator_factory::authenticator_from_properties,
    core::{
        domain::value_object::{
            ServiceName, ServiceUrl, validate_service_name, validate_service_url,
        },
        infrastructure::{
            api_client::ApiClient,
            config::{
                PROPERTY_DISABLE_SSL, PROPERTY_ENABLE_GZIP, PROPERTY_ENABLE_RETRIES,
                PROPERTY_MAX_RETRIES, PROPERTY_RETRY_INTERVAL, PROPERTY_URL,
            },
        },
    },
};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use std::{sync::Arc, time::Duration};

/// A client for the VMware as a Service API.
///
/// Clones are independent: changing the configuration of one clone does not
/// affect the others. They share the connection pool and the authenticator.
///
/// # Examples
///
/// ```no_run
/// use vmware_aas::{GetDirectorSiteOptions, IamAuthenticator, VmwareClient, VmwareResult};
///
/// #[tokio::main]
/// async fn main() -> VmwareResult<()> {
///     let client = VmwareClient::builder()
///         .service_url_for_region("eu-de")?
///         .authenticator(IamAuthenticator::new("my-api-key"))
///         .build()?;
///
///     let response = client
///         .get_director_site(&GetDirectorSiteOptions::new("site-id"))
///         .await?;
///     if let Some(site) = response.result() {
///         println!("{} is {}", site.name, site.status);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VmwareClient {
    api_client: ApiClient,
    service_name: ServiceName,
}

/// Builder for VmwareClient configuration
#[derive(Default)]
pub struct VmwareClientBuilder {
    service_url: Option<String>,
    service_name: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    default_headers: HeaderMap,
    enable_gzip: Option<bool>,
    retry_policy: Option<RetryPolicy>,
    disable_ssl_verification: Option<bool>,
    http_client: Option<Client>,
    external_config: bool,
}

impl VmwareClientBuilder {
    /// Sets the base URL. Defaults to [`DEFAULT_SERVICE_URL`].
    pub fn service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Sets the base URL of a known region, e.g. `eu-de`.
    ///
    /// # Errors
    /// Returns a validation error for an unknown region.
    pub fn service_url_for_region(mut self, region: &str) -> VmwareResult<Self> {
        let url = region_service_url(region).ok_or_else(|| {
            ValidationError::ConstraintViolation(format!("Unknown region '{region}'"))
        })?;
        self.service_url = Some(url.to_string());
        Ok(self)
    }

    /// Sets the name under which external configuration is looked up.
    /// Defaults to [`DEFAULT_SERVICE_NAME`].
    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn authenticator(self, authenticator: impl Authenticator + 'static) -> Self {
        self.shared_authenticator(Arc::new(authenticator))
    }

    pub fn shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Replaces the headers sent with every request.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Adds one header sent with every request.
    ///
    /// # Errors
    /// Returns a validation error for an invalid header name or value.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> VmwareResult<Self> {
        let name = name.as_ref();
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ValidationError::Format(format!("Invalid header name '{name}'")))?;
        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|_| {
            ValidationError::Format(format!("Invalid value for header '{name}'"))
        })?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Gzip-encodes request bodies.
    pub fn enable_gzip_compression(mut self, enable: bool) -> Self {
        self.enable_gzip = Some(enable);
        self
    }

    /// Retries transient failures with this policy. Retries are off by default.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Skips TLS certificate verification. Only for development endpoints.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = Some(disable);
        self
    }

    /// Uses a preconfigured HTTP client, e.g. with custom timeouts or proxies.
    pub fn http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Fills every setting not given explicitly from the credentials file or
    /// the environment, see [`ServiceProperties`].
    pub fn from_external_config(mut self) -> Self {
        self.external_config = true;
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    /// Returns a validation error for an invalid URL, service name or
    /// authenticator, and a transport error when the HTTP client cannot be built.
    pub fn build(mut self) -> VmwareResult<VmwareClient> {
        let service_name = self
            .service_name
            .take()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        validate_service_name(&service_name)?;
        let service_name = ServiceName::new_unchecked(service_name);

        if self.external_config {
            self.apply_properties(&ServiceProperties::load(&service_name)?)?;
        }

        let authenticator = self
            .authenticator
            .ok_or_else(|| ValidationError::missing("authenticator"))?;
        authenticator.validate()?;

        let service_url = match self.service_url {
            Some(url) => {
                validate_service_url(&url)?;
                ServiceUrl::new_unchecked(&url)
            }
            None => ServiceUrl::default(),
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .danger_accept_invalid_certs(self.disable_ssl_verification.unwrap_or(false))
                .build()
                .map_err(|e| VmwareError::Transport(e.to_string()))?,
        };

        let mut api_client = ApiClient::new(http_client, service_url, authenticator);
        api_client.set_default_headers(self.default_headers);
        api_client.set_enable_gzip(self.enable_gzip.unwrap_or(false));
        api_client.set_retry_policy(self.retry_policy);

        Ok(VmwareClient {
            api_client,
            service_name,
        })
    }

    fn apply_properties(&mut self, properties: &ServiceProperties) -> VmwareResult<()> {
        if self.service_url.is_none() {
            self.service_url = properties.get(PROPERTY_URL).map(str::to_string);
        }
        if self.enable_gzip.is_none() {
            self.enable_gzip = Some(properties.get_bool(PROPERTY_ENABLE_GZIP));
        }
        if self.disable_ssl_verification.is_none() {
            self.disable_ssl_verification = Some(properties.get_bool(PROPERTY_DISABLE_SSL));
        }
        if self.retry_policy.is_none() && properties.get_bool(PROPERTY_ENABLE_RETRIES) {
            let defaults = RetryPolicy::default();
            let max_retries = properties
                .get_u64(PROPERTY_MAX_RETRIES)?
                .map_or(defaults.max_retries, |n| {
                    u32::try_from(n).unwrap_or(u32::MAX)
                });
            let max_interval = properties
                .get_u64(PROPERTY_RETRY_INTERVAL)?
                .map_or(defaults.max_interval, Duration::from_secs);
            self.retry_policy = Some(RetryPolicy::new(max_retries, max_interval));
        }
        if self.authenticator.is_none() {
            self.authenticator = Some(authenticator_from_properties(properties)?);
        }
        Ok(())
    }
}

impl VmwareClient {
    /// Creates a new builder for VmwareClient configuration
    pub fn builder() -> VmwareClientBuilder {
        VmwareClientBuilder::default()
    }

    /// Builds a client entirely from external configuration for `service_name`.
    ///
    /// # Errors
    /// Returns a validation error when the configuration is missing or invalid.
    pub fn from_environment(service_name: &str) -> VmwareResult<Self> {
        Self::builder()
            .service_name(service_name)
            .from_external_config()
            .build()
    }

    #[must_use]
    pub fn service_name(&self) -> &str {
        self.service_name.as_str()
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        self.api_client.service_url().as_str()
    }

    /// Points the client at another base URL.
    ///
    /// # Errors
    /// Returns a validation error for an invalid URL; the client is unchanged.
    pub fn set_service_url(&mut self, service_url: &str) -> VmwareResult<()> {
        self.api_client
            .set_service_url(ServiceUrl::parse(service_url)?);
        Ok(())
    }

    #[must_use]
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        self.api_client.authenticator()
    }

    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        self.api_client.default_headers()
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.api_client.set_default_headers(headers);
    }

    #[must_use]
    pub fn enable_gzip_compression(&self) -> bool {
        self.api_client.enable_gzip()
    }

    pub fn set_enable_gzip_compression(&mut self, enable: bool) {
        self.api_client.set_enable_gzip(enable);
    }

    #[must_use]
    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.api_client.retry_policy()
    }

    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.api_client.set_retry_policy(Some(policy));
    }

    pub fn disable_retries(&mut self) {
        self.api_client.set_retry_policy(None);
    }
}
