use super::CallHeaders;
use crate::core::domain::error::ValidationError;

/// Options for `list_director_site_regions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSiteRegionsOptions {
    pub call_headers: CallHeaders,
}

impl ListDirectorSiteRegionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `list_multitenant_director_sites`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMultitenantDirectorSitesOptions {
    pub call_headers: CallHeaders,
}

impl ListMultitenantDirectorSitesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `list_director_site_host_profiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSiteHostProfilesOptions {
    pub call_headers: CallHeaders,
}

impl ListDirectorSiteHostProfilesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

super::impl_call_headers!(
    ListDirectorSiteRegionsOptions,
    ListMultitenantDirectorSitesOptions,
    ListDirectorSiteHostProfilesOptions,
);
