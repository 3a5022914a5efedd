use crate::{
    CancellationToken, DetailedResponse, DirectorSiteHostProfileCollection,
    DirectorSiteRegionCollection, ListDirectorSiteHostProfilesOptions,
    ListDirectorSiteRegionsOptions, ListMultitenantDirectorSitesOptions,
    MultitenantDirectorSiteCollection, OperationOptions, VmwareClient, VmwareResult,
    core::infrastructure::request_builder::OperationRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Lists the regions where director sites can be deployed, with their data centers.
    pub async fn list_director_site_regions(
        &self,
        options: &ListDirectorSiteRegionsOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSiteRegionCollection>> {
        self.list_director_site_regions_with(options, None).await
    }

    pub async fn list_director_site_regions_with_cancellation(
        &self,
        options: &ListDirectorSiteRegionsOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSiteRegionCollection>> {
        self.list_director_site_regions_with(options, Some(cancel))
            .await
    }

    async fn list_director_site_regions_with(
        &self,
        options: &ListDirectorSiteRegionsOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSiteRegionCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListDirectorSiteRegions",
            Method::GET,
            "/director_site_regions",
            &options.call_headers,
        );
        self.api_client.execute(request, cancel).await
    }

    /// Lists the shared director sites VDCs can be placed on.
    pub async fn list_multitenant_director_sites(
        &self,
        options: &ListMultitenantDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<MultitenantDirectorSiteCollection>> {
        self.list_multitenant_director_sites_with(options, None)
            .await
    }

    pub async fn list_multitenant_director_sites_with_cancellation(
        &self,
        options: &ListMultitenantDirectorSitesOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<MultitenantDirectorSiteCollection>> {
        self.list_multitenant_director_sites_with(options, Some(cancel))
            .await
    }

    async fn list_multitenant_director_sites_with(
        &self,
        options: &ListMultitenantDirectorSitesOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<MultitenantDirectorSiteCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListMultitenantDirectorSites",
            Method::GET,
            "/multitenant_director_sites",
            &options.call_headers,
        );
        self.api_client.execute(request, cancel).await
    }

    /// Lists the host profiles available for clusters.
    pub async fn list_director_site_host_profiles(
        &self,
        options: &ListDirectorSiteHostProfilesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSiteHostProfileCollection>> {
        self.list_director_site_host_profiles_with(options, None)
            .await
    }

    pub async fn list_director_site_host_profiles_with_cancellation(
        &self,
        options: &ListDirectorSiteHostProfilesOptions,
        cancel: &CancellationToken,
    ) -> VmwareResult<DetailedResponse<DirectorSiteHostProfileCollection>> {
        self.list_director_site_host_profiles_with(options, Some(cancel))
            .await
    }

    async fn list_director_site_host_profiles_with(
        &self,
        options: &ListDirectorSiteHostProfilesOptions,
        cancel: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<DirectorSiteHostProfileCollection>> {
        options.validate()?;
        let request = OperationRequest::new(
            "ListDirectorSiteHostProfiles",
            Method::GET,
            "/director_site_host_profiles",
            &options.call_headers,
        );
        self.api_client.execute(request, cancel).await
    }
}
