//! Options records, one per operation.
//!
//! Path parameters are plain strings validated to be non-empty. Required body
//! fields are `Option`s filled by each record's `new` constructor, so that a
//! record assembled by hand with a missing field is caught by `validate` before
//! any request leaves the client.

macro_rules! impl_call_headers {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $crate::core::domain::options::OperationOptions for $options {
                fn call_headers(&self) -> &$crate::core::domain::options::CallHeaders {
                    &self.call_headers
                }

                fn call_headers_mut(&mut self) -> &mut $crate::core::domain::options::CallHeaders {
                    &mut self.call_headers
                }

                fn validate(&self) -> Result<(), $crate::core::domain::error::ValidationError> {
                    <$options>::check(self)
                }
            }
        )+
    };
}
pub(crate) use impl_call_headers;

mod catalog_options;
mod cluster_options;
mod director_site_options;
mod pvdc_options;
mod vdc_options;

pub use catalog_options::{
    ListDirectorSiteHostProfilesOptions, ListDirectorSiteRegionsOptions,
    ListMultitenantDirectorSitesOptions,
};
pub use cluster_options::{
    CreateDirectorSitesPvdcsClustersOptions, DeleteDirectorSitesPvdcsClusterOptions,
    GetDirectorInstancesPvdcsClusterOptions, ListDirectorSitesPvdcsClustersOptions,
    UpdateDirectorSitesPvdcsClusterOptions,
};
pub use director_site_options::{
    CreateDirectorSitesOptions, DeleteDirectorSiteOptions, GetDirectorSiteOptions,
    ListDirectorSitesOptions,
};
pub use pvdc_options::{
    CreateDirectorSitesPvdcsOptions, GetDirectorSitesPvdcsOptions, ListDirectorSitesPvdcsOptions,
};
pub use vdc_options::{
    CreateVdcOptions, DeleteVdcOptions, GetVdcOptions, ListVdcsOptions, UpdateVdcOptions,
};

use crate::core::domain::error::ValidationError;
use crate::core::domain::value_object::validate_path_segment;
use std::collections::BTreeMap;

/// Per-call headers shared by every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    /// Sent as `Accept-Language`.
    pub accept_language: Option<String>,
    /// Sent as `X-Global-Transaction-ID` for request correlation.
    pub x_global_transaction_id: Option<String>,
    /// Arbitrary headers, applied last so they win over every default.
    /// Keys are lower-case header names.
    pub headers: BTreeMap<String, String>,
}

/// Behaviour common to every options record.
pub trait OperationOptions {
    fn call_headers(&self) -> &CallHeaders;

    fn call_headers_mut(&mut self) -> &mut CallHeaders;

    /// Checks required path parameters and body fields.
    fn validate(&self) -> Result<(), ValidationError>;

    #[must_use]
    fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.call_headers_mut().accept_language = Some(accept_language.into());
        self
    }

    #[must_use]
    fn with_x_global_transaction_id(mut self, transaction_id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.call_headers_mut().x_global_transaction_id = Some(transaction_id.into());
        self
    }

    /// Adds a per-call header. Names are case-insensitive; a later call with
    /// the same name replaces the earlier value.
    #[must_use]
    fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.call_headers_mut()
            .headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }
}

/// Fails when a required field is absent.
pub(crate) fn require<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or_else(|| ValidationError::missing(field))
}

/// Fails when a path parameter is empty.
pub(crate) fn require_path(field: &str, value: &str) -> Result<(), ValidationError> {
    validate_path_segment(field, value)
}
